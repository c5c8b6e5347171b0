use std::marker::PhantomData;
use crate::BitRegister;
use crate::index::{IndexDir,IndexFrom,FromLSB,FromMSB};

impl BitRegister {

  /// Iterate over the bits.
  pub fn iter_bits<INDEX: IndexDir>(&self) -> Bits<'_, INDEX> {
    Bits { dir: PhantomData, reg: self, ix: 0 }
  }

  /// Iterate over the bits, starting at the most significant end.
  /// This is the order the pages draw their bulb rows in.
  pub fn iter_bits_msb(&self) -> Bits<'_, FromMSB> { self.iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) -> Bits<'_, FromLSB> { self.iter_bits() }

}

/// Traverse the bits of a register.
#[derive(Clone)]
pub struct Bits<'a, INDEX: IndexDir> {
  dir: PhantomData<INDEX>,
  reg: &'a BitRegister,
  ix:  usize
}

impl<'a, INDEX: IndexDir> Iterator for Bits<'a, INDEX> {
  type Item = bool;
  fn next(&mut self) -> Option<Self::Item> {
    if self.ix >= self.reg.width() {
      None
    } else {
      let i = match INDEX::DIR {
                IndexFrom::Msb => self.reg.width() - self.ix - 1,
                IndexFrom::Lsb => self.ix
              };
      self.ix += 1;
      Some(self.reg.bits >> i & 1 != 0)
    }
  }
}
