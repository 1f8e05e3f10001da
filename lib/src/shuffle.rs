//! # Fisher-Yates shuffle driven by an `Lfsr`
//!
//! A single pass walks the sequence from the last index down to index 1 and swaps each
//! element with one drawn uniformly from the positions at or before it. The generator is
//! borrowed mutably so that repeated passes continue its state rather than restart it.
use crate::lfsr::Lfsr;

/// Returns a new sequence holding the elements of `sequence` permuted by one pass over `lfsr`
pub fn shuffle<T: Clone>(sequence: &[T], lfsr: &mut Lfsr) -> Vec<T> {
  let mut shuffled = sequence.to_vec();
  shuffle_in_place(&mut shuffled, lfsr);
  shuffled
}

/// Permutes `sequence` in place with one pass over `lfsr`
///
/// Sequences of length 0 or 1 are left as they are and draw nothing from `lfsr`.
pub fn shuffle_in_place<T>(sequence: &mut [T], lfsr: &mut Lfsr) {
  for i in (1..sequence.len()).rev() {
    let j = lfsr.index_below(i + 1);
    sequence.swap(i, j);
  }
}

/// Returns a new sequence after `passes` single passes over one continuing `lfsr`
pub fn shuffle_passes<T: Clone>(sequence: &[T], lfsr: &mut Lfsr, passes: usize) -> Vec<T> {
  let mut shuffled = sequence.to_vec();
  for _ in 0..passes {
    shuffle_in_place(&mut shuffled, lfsr);
  }
  shuffled
}

#[cfg(test)]
mod tests {
  use crate::lfsr::{Lfsr, Polynomial};
  use crate::shuffle::*;
  use proptest::prelude::*;

  fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.sort();
    v
  }

  #[test]
  fn abcd_with_seed_42() {
    let mut lfsr = Lfsr::new(42).unwrap();
    assert_eq!(shuffle(&["A", "B", "C", "D"], &mut lfsr), vec!["D", "C", "A", "B"]);
  }

  #[test]
  fn one_to_eight_with_seed_7() {
    let input: Vec<u32> = (1..=8).collect();
    let mut lfsr = Lfsr::new(7).unwrap();
    assert_eq!(shuffle(&input, &mut lfsr), vec![2, 3, 4, 8, 6, 7, 1, 5]);
  }

  #[test]
  fn second_pass_continues_generator_state() {
    let mut lfsr = Lfsr::new(42).unwrap();
    let first = shuffle(&["A", "B", "C", "D"], &mut lfsr);
    let second = shuffle(&first, &mut lfsr);
    assert_eq!(second, vec!["C", "A", "B", "D"]);
  }

  #[test]
  fn ten_passes_with_seed_42() {
    let mut lfsr = Lfsr::new(42).unwrap();
    let shuffled = shuffle_passes(&["A", "B", "C", "D"], &mut lfsr, 10);
    assert_eq!(shuffled, vec!["A", "D", "C", "B"]);
  }

  #[test]
  fn passes_match_repeated_single_passes() {
    let input: Vec<u32> = (0..52).collect();
    let mut a = Lfsr::new(2024).unwrap();
    let mut b = Lfsr::new(2024).unwrap();
    let mut expected = input.clone();
    for _ in 0..10 {
      expected = shuffle(&expected, &mut a);
    }
    assert_eq!(shuffle_passes(&input, &mut b, 10), expected);
    assert_eq!(a.state(), b.state());
  }

  #[test]
  fn zero_passes_is_a_copy() {
    let mut lfsr = Lfsr::new(3).unwrap();
    let before = lfsr.state();
    assert_eq!(shuffle_passes(&[1, 2, 3], &mut lfsr, 0), vec![1, 2, 3]);
    assert_eq!(lfsr.state(), before);
  }

  #[test]
  fn short_sequences_are_unchanged() {
    let mut lfsr = Lfsr::new(3).unwrap();
    let before = lfsr.state();
    let empty: [u8; 0] = [];
    assert!(shuffle(&empty, &mut lfsr).is_empty());
    assert_eq!(shuffle(&["only"], &mut lfsr), vec!["only"]);
    assert_eq!(lfsr.state(), before);
  }

  #[test]
  fn input_is_not_mutated() {
    let input = vec!['w', 'x', 'y', 'z'];
    let mut lfsr = Lfsr::new(11).unwrap();
    let _ = shuffle(&input, &mut lfsr);
    assert_eq!(input, vec!['w', 'x', 'y', 'z']);
  }

  #[test]
  fn every_position_is_reachable() {
    let mut lfsr = Lfsr::new(5).unwrap();
    let mut seen_first = [false; 5];
    for _ in 0..500 {
      let shuffled = shuffle(&[0usize, 1, 2, 3, 4], &mut lfsr);
      seen_first[shuffled[0]] = true;
    }
    assert!(seen_first.iter().all(|&s| s));
  }

  proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in 1u32.., input in prop::collection::vec(0u8..8, 0..64)) {
      let mut lfsr = Lfsr::new(seed).unwrap();
      let shuffled = shuffle(&input, &mut lfsr);
      prop_assert_eq!(shuffled.len(), input.len());
      prop_assert_eq!(sorted(&shuffled), sorted(&input));
    }

    #[test]
    fn shuffle_is_deterministic(seed in 1u32.., len in 0usize..64) {
      let input: Vec<usize> = (0..len).collect();
      let a = shuffle(&input, &mut Lfsr::new(seed).unwrap());
      let b = shuffle(&input, &mut Lfsr::new(seed).unwrap());
      prop_assert_eq!(a, b);
    }

    #[test]
    fn x16_passes_are_permutations(seed in 1u32..0x1_0000, passes in 0usize..12) {
      let input: Vec<u16> = (0..40).collect();
      let mut lfsr = Lfsr::with_polynomial(seed, Polynomial::X16).unwrap();
      let shuffled = shuffle_passes(&input, &mut lfsr, passes);
      prop_assert_eq!(sorted(&shuffled), input);
    }
  }
}
