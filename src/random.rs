use rand::RngCore;
use rand::rngs::OsRng;

use crate::BitRegister;

impl BitRegister {

  /// Overwrite the pattern with uniformly random bits drawn from the
  /// operating system's entropy source.
  pub fn randomize(&mut self) {
    self.randomize_with(&mut OsRng)
  }

  /// Overwrite the pattern with uniformly random bits drawn from
  /// `rng`.
  ///
  /// Draws `ceil(width / 8)` bytes and masks off everything beyond the
  /// width, so every pattern in `[0, 2^width - 1]` is equally likely
  /// and there is no modulo bias.  The mode does not affect the
  /// distribution, only the readout of the resulting pattern.
  pub fn randomize_with<R: RngCore>(&mut self, rng: &mut R) {
    let mut buf = [0_u8; 8];
    let used = (self.width() + 7) / 8;
    rng.fill_bytes(&mut buf[.. used]);
    self.set_pattern(u64::from_le_bytes(buf));
  }

}
