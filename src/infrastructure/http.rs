pub mod dto;
pub mod gemini_client;

pub use dto::{GenerateContentRequest, GenerateContentResponse, extract_text};
pub use gemini_client::GeminiClient;
