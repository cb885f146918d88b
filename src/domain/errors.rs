use derive_more::Display;

/// Crate-wide error type. The chart core clamps instead of failing, so these
/// only come from construction, configuration and the intel call.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    NetworkError(String),
    /// The provider answered, but not with usable text.
    #[display(fmt = "Provider Error: {}", _0)]
    ProviderError(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    RenderingError(String),
    #[display(fmt = "Validation Error: {}", _0)]
    ValidationError(String),
    #[display(fmt = "Config Error: {}", _0)]
    ConfigError(String),
}

impl std::error::Error for AppError {}

/// Config JSON that fails to parse or to match the schema.
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::ConfigError(error.to_string())
    }
}

pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
pub type ValidationResult<T> = Result<T, AppError>;
