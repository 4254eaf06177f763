use super::prompt::{build_prompt, is_known_label};
use crate::{
    Result,
    llm::{GenerateOptions, GenerateRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const MODEL: &str = "phi3:mini";

/// Greedy decoding with a short completion budget; labels are single tokens.
pub const SAMPLING: GenerateOptions = GenerateOptions {
    temperature: 0.0,
    top_p: 1.0,
    num_predict: 12,
};

pub struct IntentClassifier {
    llm_client: Arc<dyn LlmClient>,
}

impl IntentClassifier {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    pub fn generation_request(text: &str) -> GenerateRequest {
        GenerateRequest::new(MODEL, build_prompt(text), SAMPLING)
    }

    /// Returns the model's label with surrounding whitespace removed.
    ///
    /// Labels outside the template's closed set are passed through unchanged.
    pub async fn classify(&self, text: &str) -> Result<String> {
        let request = Self::generation_request(text);
        debug!("Classifying text: {}", text);

        let response = self.llm_client.generate(request).await?;
        let intent = response.response.trim().to_string();

        if !is_known_label(&intent) {
            warn!(
                "Model returned label outside the known intent set: {:?}",
                intent
            );
        }

        debug!("Classified {:?} as {}", text, intent);
        Ok(intent)
    }
}
