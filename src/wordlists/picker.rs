//! Random word selection
//!
//! Selection goes through [`IndexSource`] so tests can substitute a fixed sequence.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies indices into a list of length `len`
pub trait IndexSource {
    /// Return an index in `0..len`; `len` is never zero
    fn next_index(&mut self, len: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for Box<T> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Uniform random indices from a `StdRng`
pub struct RandomIndex {
    rng: StdRng,
}

impl RandomIndex {
    /// Seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl IndexSource for RandomIndex {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
///
/// Each value is reduced modulo the list length, so any sequence is valid.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceIndex {
    /// # Panics
    /// Panics if `indices` is empty.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        assert!(!indices.is_empty(), "SequenceIndex needs at least one index");
        Self { indices, cursor: 0 }
    }
}

impl IndexSource for SequenceIndex {
    fn next_index(&mut self, len: usize) -> usize {
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % len
    }
}

/// Pick a word uniformly from a non-empty slice
///
/// # Panics
/// Panics if `words` is empty; [`super::WordList`] rules that out at construction.
pub fn pick_word<'a, S: IndexSource + ?Sized>(words: &'a [Word], source: &mut S) -> &'a Word {
    &words[source.next_index(words.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::HashSet;

    #[test]
    fn sequence_index_replays_and_cycles() {
        let mut source = SequenceIndex::new(vec![2, 0, 7]);
        let picks: Vec<usize> = (0..6).map(|_| source.next_index(5)).collect();
        assert_eq!(picks, [2, 0, 2, 2, 0, 2]);
    }

    #[test]
    fn pick_word_follows_source() {
        let words = words_from_slice(&["axiom", "cycle", "buzzard"]);
        let mut source = SequenceIndex::new(vec![1, 2, 0]);

        assert_eq!(pick_word(&words, &mut source).text(), "cycle");
        assert_eq!(pick_word(&words, &mut source).text(), "buzzard");
        assert_eq!(pick_word(&words, &mut source).text(), "axiom");
    }

    #[test]
    fn random_index_stays_in_range() {
        let mut source = RandomIndex::seeded(7);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(source.next_index(len) < len);
            }
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RandomIndex::seeded(42);
        let mut b = RandomIndex::seeded(42);
        let first: Vec<usize> = (0..32).map(|_| a.next_index(35)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.next_index(35)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn random_picks_cover_every_word() {
        let words = words_from_slice(WORDS);
        let listed: HashSet<&str> = words.iter().map(Word::text).collect();
        let mut source = RandomIndex::seeded(2024);

        let mut seen = HashSet::new();
        for _ in 0..5_000 {
            let word = pick_word(&words, &mut source);
            assert!(listed.contains(word.text()));
            seen.insert(word.text());
        }

        assert_eq!(seen, listed);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn IndexSource> = Box::new(SequenceIndex::new(vec![4]));
        assert_eq!(source.next_index(10), 4);
    }
}
