//! # Shuffle configuration
//!
use crate::lfsr::Polynomial;

// One pass from a sparse seed leaves neighbouring cards correlated
pub const DEFAULT_PASSES: usize = 10;

/// ShuffleConfig is the policy applied by a shuffle action on a deck
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
  /// The number of single passes applied with one continuing generator
  pub passes: usize,
  /// The tap polynomial of the generator
  pub polynomial: Polynomial,
}

impl ShuffleConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_passes(passes: usize) -> Self {
    Self {
      passes,
      ..Self::default()
    }
  }
}

impl Default for ShuffleConfig {
  fn default() -> Self {
    Self {
      passes: DEFAULT_PASSES,
      polynomial: Polynomial::X32,
    }
  }
}
