use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please check your connection.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("No image data returned from model")]
    NoImageReturned,

    #[error("Provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    pub fn provider(status: Option<u16>, message: impl Into<String>) -> Self {
        GatewayError::Provider {
            status,
            message: message.into(),
        }
    }

    /// Message suitable for displaying to the end user.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Provider { message, .. } if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            GatewayError::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The provider rejected the credentials or the model entity behind them.
    pub fn is_entity_not_found(&self) -> bool {
        matches!(
            self,
            GatewayError::Provider { message, .. } if message.contains("Requested entity was not found")
        )
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::MalformedResponse(err.to_string())
    }
}

/// Transport failures carry no provider message, so users get the generic
/// text. The URL is dropped before the error is logged.
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        tracing::warn!(error = %err, "Gemini transport failure");
        GatewayError::Provider {
            status: err.status().map(|s| s.as_u16()),
            message: String::new(),
        }
    }
}

impl From<envy::Error> for GatewayError {
    fn from(err: envy::Error) -> Self {
        GatewayError::Configuration(err.to_string())
    }
}
