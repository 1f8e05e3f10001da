//! # Fingerprints
//!
//! A fingerprint seeds the generator for one shuffle action. Callers usually derive it
//! from the time of the action, so any integer is accepted and folded down to a non-zero
//! seed for the register width in use.
use crate::lfsr::Polynomial;
use chrono::{DateTime, Utc};

/// Folds `value` into a seed that is non-zero within the low `polynomial.width()` bits
pub fn fold(value: i64, polynomial: Polynomial) -> u32 {
  let value = value as u64;
  let mut folded = (value ^ (value >> 32)) as u32;
  let width = polynomial.width();
  if width < 32 {
    folded = (folded ^ (folded >> width)) & polynomial.mask();
  }
  if folded == 0 {
    1
  } else {
    folded
  }
}

/// Folds a millisecond timestamp into a non-zero 32-bit fingerprint
pub fn from_millis(millis: i64) -> u32 {
  fold(millis, Polynomial::X32)
}

/// Returns the fingerprint of `time` for a register over `polynomial`
pub fn from_datetime(time: DateTime<Utc>, polynomial: Polynomial) -> u32 {
  fold(time.timestamp_millis(), polynomial)
}
