use thiserror::Error;

/// A real number could not be represented in the requested format, either
/// because it lies outside the format's range or because it is `NaN`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value is outside the range of {format}")]
pub struct OutOfRangeError {
    /// Name of the target format, e.g. `"Q0.15"`
    pub format: &'static str,
}

/// Returned when parsing a decimal string into a Q-format number fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseQError {
    /// The string is not a decimal number
    #[error("invalid number: {0}")]
    Float(#[from] core::num::ParseFloatError),
    /// The number doesn't fit in the format
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),
}

/// A lookup table slice did not have the length the interpolation routine
/// requires.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("lookup table must have {expected} entries but has {actual}")]
pub struct TableLengthError {
    /// The required number of entries
    pub expected: usize,
    /// The number of entries supplied
    pub actual: usize,
}
