//! Plugboard (Steckerbrett)
//!
//! An optional involutive permutation representing manual wire swaps,
//! defaulting to the identity (no plugs). Pair specs are parsed leniently
//! the way the historical UIs did: a letter's second and later occurrences
//! are dropped, a letter paired with itself is dropped, and an odd trailing
//! letter is dropped. Every drop is reported back to the caller as a
//! [`PlugWarning`] and logged at warning level — never a hard failure.

use tracing::warn;

use crate::alphabet::{char_to_index, index_to_char, ALPHABET_LEN};
use crate::permutation::Permutation;

const N: usize = ALPHABET_LEN as usize;

/// A recovered plugboard-spec problem, reported alongside the lossy parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugWarning {
    /// A letter appeared in more than one pair; later occurrences dropped.
    DuplicatePlug(char),
    /// A letter was paired with itself; the pair was dropped.
    SelfPlug(char),
    /// A spec character outside the machine alphabet was skipped.
    InvalidPlugSymbol(char),
    /// An odd trailing letter had no partner and was dropped.
    DanglingPlug(char),
}

/// The involutive wire-swap permutation applied before and after the
/// rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Permutation,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no plugs.
    pub fn identity() -> Self {
        Self {
            wiring: Permutation::identity(),
        }
    }

    /// Build from explicit index pairs. Pairs must already be deduplicated
    /// and self-pair free (the [`parse`](Self::parse) front end guarantees
    /// this); used directly by the state codec and random generation.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut table = [0u8; N];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for &(a, b) in pairs {
            debug_assert!(a != b && a < ALPHABET_LEN && b < ALPHABET_LEN);
            table[a as usize] = b;
            table[b as usize] = a;
        }
        let wiring =
            Permutation::from_table(table).expect("disjoint pair swaps form a bijection");
        Self { wiring }
    }

    /// Parse a pair spec like `"AB CD EF"` (separators optional) into a
    /// plugboard, applying the lossy drop policy and collecting warnings.
    pub fn parse(spec: &str) -> (Self, Vec<PlugWarning>) {
        let mut warnings = Vec::new();
        let mut seen = [false; N];
        let mut letters: Vec<u8> = Vec::new();

        for c in spec.chars() {
            if c.is_whitespace() {
                continue;
            }
            let idx = match char_to_index(c.to_ascii_uppercase()) {
                Ok(idx) => idx,
                Err(_) => {
                    warnings.push(PlugWarning::InvalidPlugSymbol(c));
                    continue;
                }
            };
            if seen[idx as usize] {
                // A letter closing its own pair ("AA") is a self plug: the
                // whole pair is dropped and the letter freed for later use.
                // Any other re-occurrence is a duplicate of a used letter.
                if letters.len() % 2 == 1 && letters.last() == Some(&idx) {
                    letters.pop();
                    seen[idx as usize] = false;
                    warnings.push(PlugWarning::SelfPlug(index_to_char(idx)));
                } else {
                    warnings.push(PlugWarning::DuplicatePlug(index_to_char(idx)));
                }
                continue;
            }
            seen[idx as usize] = true;
            letters.push(idx);
        }

        let mut pairs = Vec::new();
        for chunk in letters.chunks(2) {
            match *chunk {
                [a, b] => pairs.push((a, b)),
                [a] => warnings.push(PlugWarning::DanglingPlug(index_to_char(a))),
                _ => unreachable!(),
            }
        }

        for w in &warnings {
            warn!(warning = ?w, "dropped plugboard entry");
        }
        (Self::from_pairs(&pairs), warnings)
    }

    /// Apply the swap. The plugboard is an involution, so the same call
    /// serves both signal directions.
    #[inline]
    pub fn apply(&self, i: u8) -> u8 {
        self.wiring.apply(i)
    }

    /// The full forward table (for state snapshots and the codec).
    pub fn wiring_table(&self) -> [u8; N] {
        *self.wiring.forward_table()
    }

    /// The plugged pairs, each reported once with the lower index first.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        let table = self.wiring.forward_table();
        (0..ALPHABET_LEN)
            .filter(|&i| table[i as usize] > i)
            .map(|i| (i, table[i as usize]))
            .collect()
    }
}
