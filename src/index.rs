use crate::{BitRegister,RegisterError};

/// Specify from which side of the register we are indexing.
#[derive(Clone,Copy)]
pub enum IndexFrom {
  /// Index from the least significant side.
  Lsb,

  /// Index from the most significant side.
  Msb
}

/// Direction for indexing.
pub trait IndexDir {
  const DIR: IndexFrom;
}

/// Index from the least significant side of the register.
#[derive(Clone,Copy)]
pub struct FromLSB;

/// Index from the most significant side of the register.  This is the
/// convention the widget pages use: position 0 is the left-most bulb.
#[derive(Clone,Copy)]
pub struct FromMSB;

impl IndexDir for FromLSB { const DIR: IndexFrom = IndexFrom::Lsb; }
impl IndexDir for FromMSB { const DIR: IndexFrom = IndexFrom::Msb; }

impl BitRegister {

  /// Turn an index into an offset from the LSB, checking bounds.
  fn lsb_offset<INDEX: IndexDir>(&self, index: usize)
    -> Result<usize, RegisterError> {
    if index >= self.width() {
      return Err(RegisterError::IndexOutOfRange
                   { index: index, width: self.width() })
    }
    Ok(match INDEX::DIR {
         IndexFrom::Msb => self.width() - index - 1,
         IndexFrom::Lsb => index
       })
  }

  /// Extract the bit at the given index.
  pub fn bit<INDEX: IndexDir>(&self, index: usize)
    -> Result<bool, RegisterError> {
    let i = self.lsb_offset::<INDEX>(index)?;
    Ok(self.bits & (1 << i) != 0)
  }

  /// Set the bit at the given index.  No other bit is affected.
  pub fn set_bit<INDEX: IndexDir>(&mut self, index: usize, value: bool)
    -> Result<(), RegisterError> {
    let i = self.lsb_offset::<INDEX>(index)?;
    let bit = 1 << i;
    if value {
      self.bits |= bit
    } else {
      self.bits &= !bit
    }
    Ok(())
  }

  /// Flip the bit at the given index.
  pub fn toggle_bit<INDEX: IndexDir>(&mut self, index: usize)
    -> Result<(), RegisterError> {
    let i = self.lsb_offset::<INDEX>(index)?;
    self.bits ^= 1 << i;
    Ok(())
  }

  pub fn bit_msb(&self, i: usize) -> Result<bool, RegisterError> {
    self.bit::<FromMSB>(i)
  }

  pub fn bit_lsb(&self, i: usize) -> Result<bool, RegisterError> {
    self.bit::<FromLSB>(i)
  }

  pub fn set_bit_msb(&mut self, i: usize, value: bool)
    -> Result<(), RegisterError> {
    self.set_bit::<FromMSB>(i, value)
  }

  pub fn set_bit_lsb(&mut self, i: usize, value: bool)
    -> Result<(), RegisterError> {
    self.set_bit::<FromLSB>(i, value)
  }

}
