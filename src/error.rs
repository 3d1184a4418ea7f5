use thiserror::Error;

/// Every variant is an invalid-input failure; none is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base85Error {
    #[error("Input should be 5 byte aligned, got {0} bytes")]
    UnalignedText(usize),

    #[error("Input should be 4 byte aligned, got {0} bytes")]
    UnalignedBytes(usize),

    #[error("Input is not valid Z85: {0}")]
    InvalidCharacters(String),

    #[error("Encoded UUID should be {expected} characters, got {actual}")]
    UuidLength { expected: usize, actual: usize },
}
