use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Failures surfaced by the client crates.
///
/// `Transport`, `Api` and `Decode` are all transport failures from the point
/// of view of a caller: the request did not produce a usable result and prior
/// state must be kept. `Validation` is raised before any request is issued.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: StatusCode,
        message: Option<String>,
        field_errors: HashMap<String, String>,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::ConfigError(anyhow::Error::new(err))
    }
}

/// Error body returned by the backend, e.g. `{"message": "...", "fieldErrs": {...}}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "fieldErrs")]
    pub field_errors: Option<HashMap<String, String>>,
}

impl ClientError {
    /// Build an `Api` error from a non-success status and the raw response body.
    ///
    /// Bodies that are not the backend's JSON error shape yield no message.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
        ClientError::Api {
            status,
            message: parsed.message.filter(|m| !m.trim().is_empty()),
            field_errors: parsed.field_errors.unwrap_or_default(),
        }
    }

    /// Message suitable for a user-facing notification, when one is known.
    ///
    /// Backend-provided messages win; validation failures are flattened into a
    /// single line. Everything else returns `None` so the caller can fall back
    /// to its own generic text.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ClientError::Api {
                message,
                field_errors,
                ..
            } => {
                let mut text = message.clone()?;
                if !field_errors.is_empty() {
                    let mut details: Vec<&String> = field_errors.values().collect();
                    details.sort();
                    let joined = details
                        .into_iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    text = format!("{}: {}", text, joined);
                }
                Some(text)
            }
            ClientError::Validation(errors) => Some(validation_message(errors)),
            ClientError::InvalidRequest(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::InvalidRequest(_)
        )
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is not valid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
