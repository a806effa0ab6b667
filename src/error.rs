use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, From};
use serde_json::json;

use crate::auth::credentials::CredentialScope;

/// Non-success answer of the payroll backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: u16,
    /// The `error` field of the response body, when the body carried one
    pub message: Option<String>,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "backend answered {}: {}", self.status, message),
            None => write!(f, "backend answered {}", self.status),
        }
    }
}

#[derive(Debug, Display, From)]
pub enum PanelError {
    #[display(fmt = "request to backend failed: {}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "malformed backend payload: {}", _0)]
    Decode(serde_json::Error),

    #[display(fmt = "{}", _0)]
    Rejected(Rejection),

    #[display(fmt = "no credential stored for scope `{}`", _0)]
    MissingCredential(CredentialScope),

    #[display(fmt = "local storage failure: {}", _0)]
    Storage(std::io::Error),

    #[display(fmt = "invalid input: {}", _0)]
    Invalid(String),
}

impl std::error::Error for PanelError {}

impl ResponseError for PanelError {
    fn status_code(&self) -> StatusCode {
        match self {
            PanelError::Invalid(_) => StatusCode::BAD_REQUEST,
            PanelError::MissingCredential(_) => StatusCode::UNAUTHORIZED,
            PanelError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
