use crate::{BitRegister,RegisterError};

impl BitRegister {

  /// Load the register from a string of binary digits.
  ///
  /// Whitespace is stripped first, so grouped output such as
  /// `"1100 1000"` parses back.  The remaining digits must all be `0`
  /// or `1`.  Fewer digits than the width pad with zeros on the left;
  /// extra digits are dropped from the left, keeping the right-most
  /// `width` digits.  The truncation is the defined contract of the
  /// widget pages, not an error.
  pub fn set_from_binary(&mut self, input: &str) -> Result<(), RegisterError> {
    let digits: String =
      input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.bytes().all(|b| b == b'0' || b == b'1') {
      return Err(RegisterError::InvalidBinary
                   { input: input.trim().to_string() })
    }

    let mut bits: u64 = 0;
    for (i,b) in digits.bytes().rev().take(self.width()).enumerate() {
      if b == b'1' { bits |= 1 << i }
    }
    self.set_pattern(bits);
    Ok(())
  }

}

#[cfg(test)]
mod test {
  use crate::{BitRegister,Mode,RegisterError};
  use crate::proptest::*;

  #[test]
  fn round_trip() {
    do_test(unary, |x: BitRegister| {
      let mut y = BitRegister::new(x.width(), x.mode());
      y.set_from_binary(&x.bit_string(4)).unwrap();
      Some(y == x)
    })
  }

  #[test]
  fn pads_short_input() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_from_binary("101").unwrap();
    assert_eq!(r.bit_string(0), "00000101");
  }

  #[test]
  fn keeps_low_digits_of_long_input() {
    let mut r = BitRegister::new(4, Mode::Unsigned);
    r.set_from_binary("11110000").unwrap();
    assert_eq!(r.value_unsigned(), 0);
    r.set_from_binary("10101").unwrap();
    assert_eq!(r.bit_string(0), "0101");
  }

  #[test]
  fn accepts_grouped_input() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_from_binary(" 1100 1000 ").unwrap();
    assert_eq!(r.value_unsigned(), 200);
  }

  #[test]
  fn rejects_junk() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_value(9).unwrap();
    for bad in ["10x1", "", "  ", "2", "0b101"] {
      let err = r.set_from_binary(bad).unwrap_err();
      assert!(matches!(err, RegisterError::InvalidBinary { .. }));
    }
    assert_eq!(r.value_unsigned(), 9);
  }

}
