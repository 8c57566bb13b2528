use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("the key length for {algorithm} must be {expected} bits, the current key length: {actual}")]
    KeyLength {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("the block text length for {algorithm} must be a multiple of {required}, the current length: {actual}")]
    BlockLength {
        algorithm: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid hex digit '{digit}' in cipher text")]
    InvalidHexDigit { digit: char },
}
