pub mod gate;
pub mod binary;
pub mod hex;

pub use crate::gate::{GateKind,GatePanel};
pub use crate::binary::{BinaryPanel,EntryError,Readout};
pub use crate::hex::{HexPanel,HexPanelError,HexReadout};
