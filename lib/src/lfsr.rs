//! # Linear-feedback shift register
//!
//! `Lfsr` is a Fibonacci LFSR: every step XORs a fixed set of tapped bits
//! into a feedback bit, shifts the register right by one and inserts the
//! feedback bit at the top. With a primitive tap polynomial the register
//! walks through all `2^N - 1` non-zero states before repeating.
//!
//! The all-zero state is a fixed point, so seeds that mask to zero are rejected.
use crate::error::ShuffleError;
use rand::RngCore;

/// Polynomial selects a maximal-length tap polynomial and the register width it belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polynomial {
  /// x^16 + x^14 + x^13 + x^11 + 1, period 65535
  X16,
  /// x^32 + x^22 + x^2 + x + 1, period 4294967295
  X32,
}

impl Polynomial {
  /// Returns the register width in bits
  pub fn width(self) -> u32 {
    match self {
      Self::X16 => 16,
      Self::X32 => 32,
    }
  }

  /// Returns the number of distinct states visited before the register repeats
  pub fn period(self) -> u64 {
    (1u64 << self.width()) - 1
  }

  // Bit `width - t` of the mask is set for every exponent `t` of the polynomial
  fn taps(self) -> u32 {
    match self {
      Self::X16 => 0b10_1101,
      Self::X32 => 0xC000_0401,
    }
  }

  pub(crate) fn mask(self) -> u32 {
    self.period() as u32
  }
}

impl Default for Polynomial {
  fn default() -> Self {
    Self::X32
  }
}

/// A deterministic pseudo-random bit stream seeded by a fingerprint
#[derive(Debug, Clone)]
pub struct Lfsr {
  state: u32,
  polynomial: Polynomial,
}

impl Lfsr {
  /// Returns a 32-bit generator seeded with `seed`
  ///
  /// # Errors
  ///
  /// `ShuffleError::InvalidSeed` if `seed` is zero
  pub fn new(seed: u32) -> Result<Self, ShuffleError> {
    Self::with_polynomial(seed, Polynomial::X32)
  }

  /// Returns a generator over `polynomial` seeded with the low `polynomial.width()` bits of `seed`
  ///
  /// # Errors
  ///
  /// `ShuffleError::InvalidSeed` if the masked seed is zero
  pub fn with_polynomial(seed: u32, polynomial: Polynomial) -> Result<Self, ShuffleError> {
    let state = seed & polynomial.mask();
    if state == 0 {
      return Err(ShuffleError::InvalidSeed(seed));
    }
    Ok(Self { state, polynomial })
  }

  /// Returns the current register value
  pub fn state(&self) -> u32 {
    self.state
  }

  pub fn polynomial(&self) -> Polynomial {
    self.polynomial
  }

  /// Advances the register by one step and returns the feedback bit
  #[inline]
  pub fn next_bit(&mut self) -> bool {
    let feedback = (self.state & self.polynomial.taps()).count_ones() & 1;
    self.state = (self.state >> 1) | (feedback << (self.polynomial.width() - 1));
    feedback == 1
  }

  /// Advances the register `count` steps and returns the feedback bits, first bit most significant
  ///
  /// Only the last 64 bits are kept when `count` exceeds 64.
  pub fn next_bits(&mut self, count: u32) -> u64 {
    let mut value = 0u64;
    for _ in 0..count {
      value = (value << 1) | self.next_bit() as u64;
    }
    value
  }

  /// Returns an integer drawn uniformly from `[0, n)`
  ///
  /// # Errors
  ///
  /// `ShuffleError::InvalidRange` if `n` is zero
  pub fn next_in_range(&mut self, n: usize) -> Result<usize, ShuffleError> {
    if n == 0 {
      return Err(ShuffleError::InvalidRange(n));
    }
    Ok(self.index_below(n))
  }

  /// Draws just enough bits to cover `bound - 1` and rejects values outside the range.
  /// `bound` must be non-zero.
  pub(crate) fn index_below(&mut self, bound: usize) -> usize {
    debug_assert!(bound > 0);
    if bound == 1 {
      return 0;
    }
    let bits = usize_bits() - (bound - 1).leading_zeros();
    loop {
      let candidate = self.next_bits(bits) as usize;
      if candidate < bound {
        return candidate;
      }
    }
  }
}

#[inline]
fn usize_bits() -> u32 {
  (std::mem::size_of::<usize>() * 8) as u32
}

impl RngCore for Lfsr {
  fn next_u32(&mut self) -> u32 {
    self.next_bits(32) as u32
  }

  fn next_u64(&mut self) -> u64 {
    self.next_bits(64)
  }

  fn fill_bytes(&mut self, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(4) {
      let word = self.next_u32().to_le_bytes();
      chunk.copy_from_slice(&word[..chunk.len()]);
    }
  }

  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}
