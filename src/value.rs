use crate::{BitRegister,Mode,RegisterError};

impl BitRegister {

  /// The pattern read with every bit carrying positive weight.
  /// Independent of the current mode.
  pub fn value_unsigned(&self) -> u64 { self.bits }

  /// The pattern read as two's complement: if the MSB is set this is
  /// `value_unsigned() - 2^width`.  Independent of the current mode.
  pub fn value_signed(&self) -> i64 {
    let unused = u64::BITS as usize - self.width();
    ((self.bits << unused) as i64) >> unused
  }

  /// The denary readout for the current mode.
  ///
  /// Returned as `i128` because the union of the two modes' ranges
  /// does not fit in a 64-bit integer of either signedness.
  pub fn value(&self) -> i128 {
    match self.mode() {
      Mode::Unsigned       => self.value_unsigned() as i128,
      Mode::TwosComplement => self.value_signed() as i128
    }
  }

  /// Smallest value representable at the current width and mode.
  pub fn min_value(&self) -> i128 {
    match self.mode() {
      Mode::Unsigned       => 0,
      Mode::TwosComplement => -(1_i128 << (self.width() - 1))
    }
  }

  /// Largest value representable at the current width and mode.
  pub fn max_value(&self) -> i128 {
    match self.mode() {
      Mode::Unsigned       => self.mask() as i128,
      Mode::TwosComplement => (1_i128 << (self.width() - 1)) - 1
    }
  }

  /// Encode a value interpreted in the current mode.
  ///
  /// The value is validated against `min_value() ..= max_value()`
  /// before anything is written.  On success the bits are rewritten
  /// with the value's non-negative representative modulo `2^width`,
  /// which is the step that makes negative inputs land on the expected
  /// two's-complement pattern.
  pub fn set_value(&mut self, value: i128) -> Result<(), RegisterError> {
    let min = self.min_value();
    let max = self.max_value();
    if value < min || value > max {
      return Err(RegisterError::ValueOutOfRange { value: value, min: min, max: max })
    }
    self.set_pattern(value as u64);
    Ok(())
  }

}
