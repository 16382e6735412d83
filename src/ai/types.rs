use std::fmt;

/// Generation API failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// No API credential was supplied at startup.
    NotConfigured,
    /// The prompt was empty or whitespace-only.
    InvalidInput,
    /// The endpoint answered with a non-success HTTP status.
    Upstream { status: u16, message: String },
    /// The request never produced an HTTP response.
    Network(String),
    /// A success response carried no generated candidate.
    EmptyResponse,
}

impl AiError {
    /// Suggested HTTP status when surfacing this error to an API caller.
    pub fn http_status(&self) -> u16 {
        match self {
            AiError::NotConfigured => 503,
            AiError::InvalidInput => 400,
            AiError::Upstream { .. } | AiError::Network(_) | AiError::EmptyResponse => 502,
        }
    }
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NotConfigured => write!(f, "Gemini API key is not configured"),
            AiError::InvalidInput => write!(f, "Please provide a valid prompt"),
            AiError::Upstream { status, message } => {
                write!(f, "Gemini API error: HTTP {}: {}", status, message)
            }
            AiError::Network(message) => write!(f, "Gemini API request failed: {}", message),
            AiError::EmptyResponse => write!(f, "No response generated from Gemini"),
        }
    }
}

impl std::error::Error for AiError {}
