use thiserror::Error;

/// Errors returned by the fallible register operations.
///
/// Every error is detected before any mutation, so a failed call
/// leaves the register exactly as it was.  The display strings are
/// written to be shown to the user as-is by the widget layer.
#[derive(Debug,Clone,PartialEq,Eq,Error)]
pub enum RegisterError {

  /// Bit index outside `[0, width)`.
  #[error("bit {index} does not exist in a {width}-bit register")]
  IndexOutOfRange { index: usize, width: usize },

  /// Value outside the legal interval for the current width and mode.
  #[error("{value} is out of range, enter a value between {min} and {max}")]
  ValueOutOfRange { value: i128, min: i128, max: i128 },

  /// Input is not a string of binary digits.
  #[error("{input:?} is not a binary value, use only the digits 0 and 1")]
  InvalidBinary { input: String }

}
