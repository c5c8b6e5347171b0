use crate::BitRegister;

impl BitRegister {

  /// Add one, wrapping from the top of the range to the bottom.
  ///
  /// One masked wrapping add realizes both modes: unsigned wraps
  /// `2^width - 1` to `0`, two's complement wraps the maximum to the
  /// minimum.
  pub fn increment(&mut self) {
    self.bits = self.bits.wrapping_add(1);
    self.fix_overflow();
  }

  /// Subtract one, wrapping from the bottom of the range to the top.
  pub fn decrement(&mut self) {
    self.bits = self.bits.wrapping_sub(1);
    self.fix_overflow();
  }

}
