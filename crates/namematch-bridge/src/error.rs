/// Failures reported back to C callers as strings.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("source is not valid UTF-8: {0}")]
    NonUtf8(#[from] std::str::Utf8Error),

    #[error("configuration is not valid UTF-8: {0}")]
    NonUtf8Configuration(std::str::Utf8Error),

    #[error(transparent)]
    Library(#[from] namematch_lib::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
