pub mod http;
pub mod rendering;
pub mod services;

pub use services::{BrowserTimeProvider, ConsoleLogger};
