use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PadicError {
    #[error("Base mismatch: expected {expected}, got {actual}")]
    MismatchedBase { expected: u32, actual: u32 },

    #[error("Unsupported operand: {0}")]
    UnsupportedOperand(String),

    #[error("No inverse: {value} is not coprime to {modulus}")]
    NoInverse { value: i64, modulus: i64 },

    #[error("Invalid base: {0} (must be at least 2)")]
    InvalidBase(u32),

    #[error("Invalid digit: {digit} exceeds base {base}")]
    InvalidDigit { digit: u32, base: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PadicError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PadicError>;
