// Controller state for the binary register pages, free of any display
// concern.  The UI binds events to these methods and redraws from
// `readout`.

use thiserror::Error;

use bitreg::{BitRegister,FromMSB,Mode,RegisterError};

/// Errors from free-text entry on a panel.  The display strings are
/// the messages the page shows next to the input box.
#[derive(Debug,Clone,PartialEq,Eq,Error)]
pub enum EntryError {

  /// The text did not parse as a whole number at all.
  #[error("that is not a whole number, enter a value between {min} and {max}")]
  NotANumber { min: i128, max: i128 },

  #[error(transparent)]
  Register(#[from] RegisterError)

}

/// What the page displays after every interaction.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Readout {
  pub denary: i128,
  pub binary: String
}

/// One binary simulator widget: a register plus the interaction rules
/// of the page.  Owns no display surface.
#[derive(Clone,Debug)]
pub struct BinaryPanel {
  reg:   BitRegister,
  group: usize
}

impl BinaryPanel {

  /// The 8-bit unsigned page.
  pub fn unsigned() -> BinaryPanel {
    BinaryPanel::with_register(BitRegister::default())
  }

  /// The 8-bit two's-complement page.
  pub fn twos_complement() -> BinaryPanel {
    BinaryPanel::with_register(
      BitRegister::new(BitRegister::DEFAULT_WIDTH, Mode::TwosComplement))
  }

  pub fn with_register(reg: BitRegister) -> BinaryPanel {
    BinaryPanel { reg: reg, group: 4 }
  }

  /// The underlying register, for rendering bulbs and labels.
  pub fn register(&self) -> &BitRegister { &self.reg }

  /// How many digits between spaces in the binary readout; `0` for an
  /// ungrouped readout.
  pub fn set_grouping(&mut self, group: usize) { self.group = group }

  /// Toggle the switch at a display position, left-most switch first.
  pub fn toggle(&mut self, position: usize) -> Result<(), RegisterError> {
    self.reg.toggle_bit::<FromMSB>(position)
  }

  /// Reinterpret the pattern; bulbs stay as they are.
  pub fn set_mode(&mut self, mode: Mode) { self.reg.set_mode(mode) }

  /// The bit-width stepper.
  pub fn resize(&mut self, width: usize) { self.reg.resize(width) }

  pub fn clear(&mut self) { self.reg.clear() }

  pub fn increment(&mut self) { self.reg.increment() }

  pub fn decrement(&mut self) { self.reg.decrement() }

  pub fn randomize(&mut self) { self.reg.randomize() }

  /// Shift towards the MSB; always logical.
  pub fn shift_left(&mut self) { self.reg.shift_left() }

  /// Shift towards the LSB; arithmetic in two's-complement mode so the
  /// sign is preserved, logical otherwise.
  pub fn shift_right(&mut self) {
    match self.reg.mode() {
      Mode::TwosComplement => self.reg.shift_right_arithmetic(),
      Mode::Unsigned       => self.reg.shift_right_logical()
    }
  }

  /// Free-text binary entry.  On error nothing is applied.
  pub fn enter_binary(&mut self, text: &str) -> Result<(), RegisterError> {
    self.reg.set_from_binary(text)
  }

  /// Free-text denary entry.  The error text states the legal range
  /// for the current width and mode; on error nothing is applied.
  pub fn enter_denary(&mut self, text: &str) -> Result<(), EntryError> {
    let value = text.trim().parse::<i128>().map_err(|_|
      EntryError::NotANumber {
        min: self.reg.min_value(),
        max: self.reg.max_value()
      })?;
    self.reg.set_value(value)?;
    Ok(())
  }

  /// Place values for the column labels, left-most first.  In
  /// two's-complement mode the left-most label is negative.
  pub fn bit_weights(&self) -> Vec<i128> {
    let w = self.reg.width();
    (0 .. w).map(|i| {
      let weight = 1_i128 << (w - i - 1);
      if i == 0 && self.reg.mode() == Mode::TwosComplement {
        -weight
      } else {
        weight
      }
    }).collect()
  }

  pub fn readout(&self) -> Readout {
    Readout {
      denary: self.reg.value(),
      binary: self.reg.bit_string(self.group)
    }
  }

}
