use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status, with the server's `detail`/`message` when it sent one.
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose `status` field is not `"ok"`.
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No endpoint configured for {0}")]
    MissingEndpoint(&'static str),
}

impl ApiError {
    /// Text worth showing to the user: whatever the server said, else `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail,
            ApiError::Rejected {
                message: Some(message),
            } => message,
            _ => fallback,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
