// Terminal walkthrough of the widget models, standing in for the web
// pages while developing the controllers.

use bitreg::Mode;
use bitsim::{BinaryPanel,GateKind,GatePanel,HexPanel};

fn show(label: &str, panel: &BinaryPanel) {
  let out = panel.readout();
  println!("{:24} {}  =  {}", label, out.binary, out.denary);
}

pub fn main() {
  let mut panel = BinaryPanel::twos_complement();

  show("start", &panel);
  for pos in [0, 1, 2, 3] {
    if let Err(e) = panel.toggle(pos) { println!("{}", e) }
  }
  show("toggled 4 high bits", &panel);

  panel.shift_right();
  show("shift right (sign kept)", &panel);

  panel.set_mode(Mode::Unsigned);
  show("read as unsigned", &panel);

  if let Err(e) = panel.enter_denary("999") {
    println!("{:24} {}", "denary entry", e);
  }
  if let Err(e) = panel.enter_binary("120") {
    println!("{:24} {}", "binary entry", e);
  }

  panel.randomize();
  show("randomized", &panel);

  match HexPanel::new(2) {
    Err(e) => println!("{}", e),
    Ok(mut hex) => {
      for _ in 0 .. 13 { let _ = hex.increment_digit(1); }
      for _ in 0 .. 8  { let _ = hex.increment_digit(0); }
      let out = hex.readout();
      println!("{:24} {}  =  {}  =  {}", "hex mixer", out.hex, out.denary,
               out.binary);
    }
  }

  let mut gate = GatePanel::new(GateKind::Xor);
  gate.toggle_a();
  println!("{:24} {}(1,0) = {}", "gate", gate.kind().label(), gate.output());
}
