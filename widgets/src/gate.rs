// Two-input logic gates for the gate simulator pages

/// The gate a simulator page is wired as, fixed at construction.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum GateKind { And, Or, Not, Nand, Nor, Xor, Xnor }

impl GateKind {

  /// Every kind, in the order the site lists the pages.
  pub const ALL: [GateKind; 7] =
    [ GateKind::And, GateKind::Or, GateKind::Not, GateKind::Nand
    , GateKind::Nor, GateKind::Xor, GateKind::Xnor ];

  /// Evaluate the gate.  `Not` is a one-input gate and ignores `b`.
  pub fn eval(self, a: bool, b: bool) -> bool {
    match self {
      GateKind::And  => a && b,
      GateKind::Or   => a || b,
      GateKind::Not  => !a,
      GateKind::Nand => !(a && b),
      GateKind::Nor  => !(a || b),
      GateKind::Xor  => a != b,
      GateKind::Xnor => a == b
    }
  }

  /// Display name used in page headings.
  pub fn label(self) -> &'static str {
    match self {
      GateKind::And  => "AND",
      GateKind::Or   => "OR",
      GateKind::Not  => "NOT",
      GateKind::Nand => "NAND",
      GateKind::Nor  => "NOR",
      GateKind::Xor  => "XOR",
      GateKind::Xnor => "XNOR"
    }
  }

}

/// State of one gate simulator page: two toggle switches and a bulb.
#[derive(Clone,Copy,Debug)]
pub struct GatePanel {
  kind: GateKind,
  a:    bool,
  b:    bool
}

impl GatePanel {

  pub fn new(kind: GateKind) -> GatePanel {
    GatePanel { kind: kind, a: false, b: false }
  }

  pub fn kind(&self) -> GateKind { self.kind }

  pub fn inputs(&self) -> (bool, bool) { (self.a, self.b) }

  /// Flip the first input switch; returns the new bulb state.
  pub fn toggle_a(&mut self) -> bool {
    self.a = !self.a;
    self.output()
  }

  /// Flip the second input switch; returns the new bulb state.
  pub fn toggle_b(&mut self) -> bool {
    self.b = !self.b;
    self.output()
  }

  /// The bulb state for the current inputs.
  pub fn output(&self) -> bool {
    self.kind.eval(self.a, self.b)
  }

}

#[cfg(test)]
mod test {
  use super::*;

  // rows are (a, b, expected) over the full input square
  fn check(kind: GateKind, expect: [bool; 4]) {
    let cases = [(false,false), (false,true), (true,false), (true,true)];
    for ((a,b), &want) in cases.into_iter().zip(expect.iter()) {
      assert_eq!(kind.eval(a, b), want, "{} {:?}", kind.label(), (a,b));
    }
  }

  #[test]
  fn truth_tables() {
    check(GateKind::And,  [false, false, false, true ]);
    check(GateKind::Or,   [false, true,  true,  true ]);
    check(GateKind::Not,  [true,  true,  false, false]);
    check(GateKind::Nand, [true,  true,  true,  false]);
    check(GateKind::Nor,  [true,  false, false, false]);
    check(GateKind::Xor,  [false, true,  true,  false]);
    check(GateKind::Xnor, [true,  false, false, true ]);
  }

  #[test]
  fn nand_negates_and() {
    for (a,b) in [(false,false), (false,true), (true,false), (true,true)] {
      assert_eq!(GateKind::Nand.eval(a,b), !GateKind::And.eval(a,b));
      assert_eq!(GateKind::Nor.eval(a,b),  !GateKind::Or.eval(a,b));
      assert_eq!(GateKind::Xnor.eval(a,b), !GateKind::Xor.eval(a,b));
    }
  }

  #[test]
  fn labels_are_distinct() {
    for (i, g) in GateKind::ALL.into_iter().enumerate() {
      for h in &GateKind::ALL[i + 1 ..] {
        assert_ne!(g.label(), h.label());
      }
    }
  }

  #[test]
  fn panel_tracks_switches() {
    let mut p = GatePanel::new(GateKind::Xor);
    assert!(!p.output());
    assert!(p.toggle_a());
    assert!(!p.toggle_b());
    assert_eq!(p.inputs(), (true, true));
    assert!(p.toggle_a());
  }

}
