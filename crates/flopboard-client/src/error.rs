use std::fmt;

/// Result type for flopboard-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the remote data port
#[derive(Debug)]
pub enum Error {
    /// Transport failure, non-2xx status, or body decode failure
    Http(reqwest::Error),

    /// Failure raised by a non-HTTP implementation (fakes, wrappers)
    Internal(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Internal(err) => Some(err.as_ref()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
