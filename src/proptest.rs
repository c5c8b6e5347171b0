use rand::RngCore;
use crate::{BitRegister,Mode};
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl ValueTree for BitRegister {
  type Value = BitRegister;

  fn current(&self) -> BitRegister { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

#[derive(Debug)]
pub struct RegisterStrategy { pub width: usize }

impl Strategy for RegisterStrategy {
  type Tree  = BitRegister;
  type Value = BitRegister;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    let mode = if rng.next_u32() & 1 == 0 { Mode::Unsigned }
               else { Mode::TwosComplement };
    let mut result = BitRegister::new(self.width, mode);
    result.randomize_with(rng);
    Ok(result)
  }
}

impl Arbitrary for BitRegister {
  type Parameters = usize;
  type Strategy   = RegisterStrategy;

  fn arbitrary_with(width: usize) -> Self::Strategy {
    RegisterStrategy { width: width }
  }
}

/// Run a property over randomly filled registers of every supported
/// width.  `None` from the property rejects the test case.
pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for width in BitRegister::MIN_WIDTH ..= BitRegister::MAX_WIDTH {
    let mut cfg: Config = <_>::default();
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(width);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl BitRegister {
  /// The pattern as a bignum, for checking against reference
  /// arithmetic.
  pub fn sem(&self) -> num::BigUint {
    num::BigUint::from(self.value_unsigned())
  }
}

pub fn pow2(bits: usize) -> num::BigUint {
  let x: num::BigUint = 2_u64.into();
  x.pow(bits as u32)
}

pub fn unary(width: usize) -> StrategyFor<BitRegister> {
  arbitrary_with(width)
}

pub fn word_and<T>(width: usize) -> StrategyFor<(BitRegister,T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((width,()))
}
