use derive_more::Display;
use std::fmt::Arguments;
use std::sync::OnceLock;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Layer a log line comes from, tagged with the emitting type.
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Milliseconds since the epoch.
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self { timestamp: get_time_provider().current_timestamp(), level, component, message: message.into() }
    }

    /// `[12:30:05.120]  INFO APP:ChartService | message`
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} {} | {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        )
    }
}

/// Wall clock as seen by the dashboard.
///
/// Timestamps are milliseconds since the epoch. The UTC offset is used by the
/// chart's time axis so labels follow the viewer's local clock.
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn utc_offset_minutes(&self) -> i32 {
        0
    }
    fn format_timestamp(&self, timestamp: u64) -> String;

    fn current_unix_seconds(&self) -> u64 {
        self.current_timestamp() / 1000
    }
}

/// Sink for log entries. Filtering by level is up to the sink.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// First call wins; later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&SystemClock)
}

/// Backend of the `log_*!` macros. Nothing is formatted until a logger is
/// installed.
pub fn emit(level: LogLevel, component: LogComponent, args: Arguments<'_>) {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.log(LogEntry::new(level, component, args.to_string()));
    }
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Fallback clock until the browser one is installed (and in native tests).
struct SystemClock;

impl TimeProvider for SystemClock {
    fn current_timestamp(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        }
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp % 1_000_000)
    }
}

/// Trace and debug lines compile out of release builds.
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str("warn"), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("DEBUG"), Ok(LogLevel::Debug));
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn line_carries_level_component_and_message() {
        let entry = LogEntry::new(LogLevel::Info, LogComponent::Application("ChartService"), "ready");
        let line = entry.format_line();
        assert!(line.ends_with(" INFO APP:ChartService | ready"), "{}", line);
    }
}
