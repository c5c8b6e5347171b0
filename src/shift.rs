use crate::BitRegister;

impl BitRegister {

  /// Drop the MSB and bring in a zero at the LSB end.
  pub fn shift_left(&mut self) {
    self.bits <<= 1;
    self.fix_overflow();
  }

  /// Drop the LSB and bring in a zero at the MSB end.
  pub fn shift_right_logical(&mut self) {
    self.bits >>= 1;
  }

  /// Drop the LSB and repeat the previous MSB at the MSB end, so a
  /// two's-complement value keeps its sign.  Callers pick this or the
  /// logical form based on the register's mode.
  pub fn shift_right_arithmetic(&mut self) {
    let sign = self.bits >> (self.width() - 1) & 1;
    self.bits = self.bits >> 1 | sign << (self.width() - 1);
  }

}

#[cfg(test)]
mod test {
  use crate::{BitRegister,Mode};
  use crate::proptest::*;

  #[test]
  fn arithmetic_right_keeps_sign() {
    let mut r = BitRegister::new(8, Mode::TwosComplement);
    r.set_from_binary("11110000").unwrap();
    assert_eq!(r.value(), -16);
    r.shift_right_arithmetic();
    assert_eq!(r.bit_string(0), "11111000");
    assert_eq!(r.value(), -8);
  }

  #[test]
  fn arithmetic_right_on_positive_is_logical() {
    let mut r = BitRegister::new(8, Mode::TwosComplement);
    r.set_value(64).unwrap();
    r.shift_right_arithmetic();
    assert_eq!(r.value(), 32);
  }

  #[test]
  fn logical_right_clears_msb() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_from_binary("10000001").unwrap();
    r.shift_right_logical();
    assert_eq!(r.bit_string(0), "01000000");
  }

  #[test]
  fn left_drops_msb() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_from_binary("11000000").unwrap();
    r.shift_left();
    assert_eq!(r.bit_string(0), "10000000");
  }

  #[test]
  fn left_doubles() {
    do_test(unary, |x: BitRegister| {
      let mut y = x.clone();
      y.shift_left();
      Some(y.sem() == x.sem() * 2_u64 % pow2(x.width()))
    })
  }

  #[test]
  fn logical_right_halves() {
    do_test(unary, |x: BitRegister| {
      let mut y = x.clone();
      y.shift_right_logical();
      Some(y.sem() == x.sem() / 2_u64)
    })
  }

  #[test]
  fn width_one() {
    let mut r = BitRegister::new(1, Mode::Unsigned);
    r.set_value(1).unwrap();
    r.shift_right_arithmetic();
    assert_eq!(r.value_unsigned(), 1);
    r.shift_right_logical();
    assert_eq!(r.value_unsigned(), 0);
    r.set_value(1).unwrap();
    r.shift_left();
    assert_eq!(r.value_unsigned(), 0);
  }

}
