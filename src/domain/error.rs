//! Failure type of the `SteamProvider` seam.

/// Category of a Steam API failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-2xx status (401 for private friend lists)
    Http(u16),
    /// Transport level failure (DNS, TLS, timeout)
    Request,
    /// Body did not match the expected payload
    Decode,
    /// Lookup succeeded but matched nothing
    NotFound,
    /// Identifier could not be interpreted at all
    InvalidInput,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub endpoint: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new(endpoint: &str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.endpoint, self.message)
    }
}

impl std::error::Error for Error {}
