use crate::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub text: String,
    pub intent: String,
}

/// Failures surfaced to HTTP callers as plain-text bodies.
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    InvalidJson,
    Inference(Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "Method not allowed",
            Self::InvalidJson => "Invalid JSON body",
            Self::Inference(Error::Network(_)) => "Failed to reach inference server",
            Self::Inference(Error::Serialization(_)) => {
                "Failed to decode inference server response"
            }
            Self::Inference(_) => "Inference request failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}
