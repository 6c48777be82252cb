use num_bigint::BigInt;
use thiserror::Error;

/// Everything that can go wrong between reading a share document and
/// printing the secret. Errors are raised at the point the bad data is
/// first seen (decode-time vs. reconstruct-time) and propagated as-is;
/// there is no partial recovery in a one-shot batch computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character in an encoded value is not a digit of the stated base.
    #[error("invalid digit {ch:?} for base {base}")]
    InvalidDigit { ch: char, base: u32 },

    /// The stated radix is outside [2, 36].
    #[error("base {0} out of range, expected 2..=36")]
    InvalidBase(u32),

    /// A fixed-width integer conversion left the representable range.
    #[error("value does not fit in the target integer type")]
    Overflow,

    /// A share record in the input document lacks a required field.
    #[error("share {id:?} is missing field {field:?}")]
    MissingField { id: String, field: &'static str },

    /// Fewer shares were supplied than the declared threshold.
    #[error("not enough shares: need at least {needed}, got {got}")]
    InsufficientShares { needed: usize, got: usize },

    /// Two selected interpolation points have the same x-coordinate.
    #[error("duplicate x-coordinate {x} among selected shares")]
    DuplicateAbscissa { x: BigInt },

    /// The threshold is zero, so no polynomial is determined.
    #[error("threshold must be at least 1")]
    DegenerateInput,

    /// Interpolation at x = 0 did not reduce to an integer, meaning the
    /// supplied points do not lie on a common integer-valued polynomial.
    #[error("reconstructed value {0} is not an integer")]
    NonIntegerResult(String),

    /// The input document is structurally broken.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
