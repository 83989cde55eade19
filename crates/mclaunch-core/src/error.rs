use thiserror::Error;

/// Failure of the narrow-to-wide re-encoding step.
///
/// Both variants carry the platform's last-error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Failed to get buffer size for wide string conversion. Error code: {0}")]
    SizeQueryFailed(u32),

    #[error("Failed to convert URI to wide string. Error code: {0}")]
    ConversionFailed(u32),
}

impl EncodingError {
    pub fn code(&self) -> u32 {
        match self {
            Self::SizeQueryFailed(code) | Self::ConversionFailed(code) => *code,
        }
    }
}

/// Failure of the handler dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The raw dispatch value, at or below the success threshold.
    #[error("Failed to open URI. Error code: {0}")]
    DispatchFailed(isize),
}

impl InvocationError {
    pub fn code(&self) -> isize {
        match self {
            Self::DispatchFailed(code) => *code,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
