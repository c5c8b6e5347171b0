use crate::BitRegister;
use std::fmt;

impl fmt::Binary for BitRegister {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = String::new();
    for b in self.iter_bits_msb() {
      s.push(if b { '1' } else { '0' })
    }
    f.pad_integral(true, "0b", &s)
  }
}

impl BitRegister {

  fn fmt_hex(&self, f: &mut fmt::Formatter, table: [char; 16]) -> fmt::Result {
    let mut s = String::new();
    let extra = self.width() % 4;
    let mut emit = |x: u64| s.push(table[x as usize]);

    if extra != 0 {
      emit(self.bits >> (self.width() - extra))
    }
    for i in (0 .. self.width() / 4).rev() {
      emit(self.bits >> (4 * i) & 0xF)
    }

    f.pad_integral(true, "0x", &s)
  }

  /// Binary digits, most significant first, with a space every `group`
  /// bits counted from the least significant end.  `0` disables
  /// grouping.  The pages group by 4 or by 8.
  pub fn bit_string(&self, group: usize) -> String {
    let mut s = String::with_capacity(self.width() + 8);
    for (i,b) in self.iter_bits_msb().enumerate() {
      if i > 0 && group != 0 && (self.width() - i) % group == 0 {
        s.push(' ')
      }
      s.push(if b { '1' } else { '0' })
    }
    s
  }

  /// Uppercase hexadecimal, zero-padded to the full width.  Registers
  /// whose width is not a multiple of 4 get a partial leading digit.
  pub fn hex_string(&self) -> String {
    format!("{:X}", self)
  }

}

impl fmt::UpperHex for BitRegister {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_hex(f, ['0','1','2','3','4','5','6','7','8','9'
                    ,'A','B','C','D','E','F'])
  }
}

impl fmt::LowerHex for BitRegister {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    self.fmt_hex(f, ['0','1','2','3','4','5','6','7','8','9'
                    ,'a','b','c','d','e','f'])
  }
}

#[cfg(test)]
mod test {
  use crate::{BitRegister,Mode};

  #[test]
  fn grouped_binary() {
    let mut r = BitRegister::new(8, Mode::Unsigned);
    r.set_value(200).unwrap();
    assert_eq!(r.bit_string(4), "1100 1000");
    assert_eq!(r.bit_string(8), "11001000");
    assert_eq!(r.bit_string(0), "11001000");
    assert_eq!(format!("{:b}", r), "11001000");
  }

  #[test]
  fn group_aligns_to_lsb() {
    let mut r = BitRegister::new(6, Mode::Unsigned);
    r.set_value(0b10_1010).unwrap();
    assert_eq!(r.bit_string(4), "10 1010");
  }

  #[test]
  fn hex_zero_padded() {
    let mut r = BitRegister::new(16, Mode::Unsigned);
    r.set_value(0x00C8).unwrap();
    assert_eq!(r.hex_string(), "00C8");
    assert_eq!(format!("{:x}", r), "00c8");
    assert_eq!(format!("{:#x}", r), "0x00c8");
  }

  #[test]
  fn hex_partial_top_digit() {
    let mut r = BitRegister::new(6, Mode::Unsigned);
    r.set_value(0b10_1010).unwrap();
    assert_eq!(r.hex_string(), "2A");
  }

}
