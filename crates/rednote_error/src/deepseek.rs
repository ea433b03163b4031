//! DeepSeek provider error types.

/// DeepSeek-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeepSeekErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// HTTP request failed outright (connection, DNS, timeout)
    Http(String),
    /// API returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
    /// Request could not be expressed in the chat completions format
    InvalidRequest(String),
    /// Failed to parse the response body
    ResponseParsing(String),
    /// Builder error while assembling a request
    Builder(String),
}

impl std::fmt::Display for DeepSeekErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeepSeekErrorKind::MissingApiKey => {
                write!(f, "DEEPSEEK_API_KEY environment variable not set")
            }
            DeepSeekErrorKind::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            DeepSeekErrorKind::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            DeepSeekErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            DeepSeekErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            DeepSeekErrorKind::Builder(msg) => write!(f, "Builder error: {}", msg),
        }
    }
}

/// DeepSeek error with kind discrimination and source location.
#[derive(Debug, Clone)]
pub struct DeepSeekError {
    /// The error kind
    pub kind: DeepSeekErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DeepSeekError {
    /// Create a new DeepSeekError from a kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use rednote_error::{DeepSeekError, DeepSeekErrorKind};
    ///
    /// let err = DeepSeekError::new(DeepSeekErrorKind::MissingApiKey);
    /// assert!(format!("{}", err).contains("DEEPSEEK_API_KEY"));
    /// ```
    #[track_caller]
    pub fn new(kind: DeepSeekErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DeepSeekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DeepSeek Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DeepSeekError {}
