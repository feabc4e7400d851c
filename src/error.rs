use thiserror::Error;

use crate::contact::Field;

/// Failure reported by the email delivery service.
///
/// Every variant collapses to the same user-facing notification; the detail
/// only ends up in the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: http::StatusCode, body: String },
    #[error("couldn't encode email payload: {0}")]
    Encode(String),
    #[error("email delivery is only available in the browser")]
    Unavailable,
}

impl EmailError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status: http::StatusCode::from_u16(status)
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
        }
    }
}

/// A submission that never reaches the email service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
