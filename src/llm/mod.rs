mod client;
mod types;

pub use client::{LlmClient, OllamaClient};
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse};
