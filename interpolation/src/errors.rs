use num_bigint::BigInt;

use crate::poly::Rational;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Decoding.
    #[error("invalid radix {0}")]
    InvalidRadix(u32),
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },
    #[error("empty value")]
    EmptyValue,

    // Interpolation.
    #[error("duplicate x-coordinate {0}")]
    DegenerateInput(BigInt),
    #[error("non-integer result {0}")]
    NonIntegerResult(Rational),
    #[error("no points")]
    NoPoints,

    // Test cases.
    #[error("invalid threshold")]
    InvalidThreshold,
    #[error("not enough points: required {required}, available {available}")]
    NotEnoughPoints { required: usize, available: usize },
    #[error("missing point {0}")]
    MissingPoint(usize),
    #[error("invalid x-coordinate {0:?}")]
    InvalidCoordinate(String),
    #[error("malformed test case: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // Configuration.
    #[error("unknown point selection {0:?}")]
    UnknownSelection(String),
}
