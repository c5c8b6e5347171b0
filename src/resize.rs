use crate::BitRegister;

impl BitRegister {

  /// Change the width, keeping the LSB-aligned suffix of the pattern.
  ///
  /// Growing brings in clear high-order bits; shrinking drops them, so
  /// the readout may change, and a negative two's-complement value can
  /// lose its sign bit.  That re-alignment is the defined contract.
  /// Widths outside the supported range are clamped.
  pub fn resize(&mut self, new_width: usize) {
    self.width = new_width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
    self.fix_overflow();
  }

}
