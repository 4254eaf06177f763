use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

pub struct OllamaClient {
    client: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let base_url = config.host.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::config("Ollama host must not be empty"));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}/api/generate", base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "Sending generation request to {} (model: {}, prompt: {} bytes)",
            self.endpoint,
            request.model,
            request.prompt.len()
        );

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::llm(format!(
                "Inference server returned status {}",
                status
            )));
        }

        let body = response.bytes().await?;
        let generated: GenerateResponse = serde_json::from_slice(&body)?;

        debug!("Received generation response: {:?}", generated.response);

        Ok(generated)
    }
}
