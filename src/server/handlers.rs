use super::types::{ApiError, ClassifyRequest, ClassifyResponse};
use crate::intent::IntentClassifier;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<IntentClassifier>,
}

impl AppState {
    pub fn new(classifier: IntentClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

pub async fn classify(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let request: ClassifyRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejecting malformed classify request: {}", e);
        ApiError::InvalidJson
    })?;

    info!("Received classification request for text: {}", request.text);

    match state.classifier.classify(&request.text).await {
        Ok(intent) => {
            info!("Classified {:?} as {}", request.text, intent);
            Ok(Json(ClassifyResponse {
                text: request.text,
                intent,
            }))
        }
        Err(e) => {
            error!("Failed to classify {:?}: {}", request.text, e);
            Err(ApiError::Inference(e))
        }
    }
}

/// CORS pre-flight. Headers are attached by the router for every response.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    debug!("Rejecting {} request on /classify", method);
    ApiError::MethodNotAllowed
}
