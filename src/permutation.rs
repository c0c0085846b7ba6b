//! Bijective contact permutations
//!
//! The atomic building block of every wired component: an immutable
//! forward/backward table pair over the 26 contacts. Built once from a
//! static wiring table at machine (re)configuration time, never mutated.
//!
//! # Invariants
//!
//! - `forward` is a total bijection on `[0, 26)`
//! - `backward` is its exact inverse: `forward[backward[i]] == i` for all i
//!
//! Both are enforced at construction; a table that fails the check is a
//! hard `InvalidWiring` error because a broken permutation silently
//! corrupts every subsequent symbol.

use crate::alphabet::ALPHABET_LEN;
use crate::error::{EnigmaError, Result};

const N: usize = ALPHABET_LEN as usize;

/// An immutable bijective mapping over the alphabet plus its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [u8; N],
    backward: [u8; N],
}

impl Permutation {
    /// Build from a forward table, validating bijectivity.
    pub fn from_table(forward: [u8; N]) -> Result<Self> {
        let mut backward = [u8::MAX; N];
        for (i, &out) in forward.iter().enumerate() {
            if out >= ALPHABET_LEN {
                return Err(EnigmaError::invalid_wiring(format!(
                    "contact {i} maps to {out}, outside the alphabet"
                )));
            }
            if backward[out as usize] != u8::MAX {
                return Err(EnigmaError::invalid_wiring(format!(
                    "contacts {} and {i} both map to {out}",
                    backward[out as usize]
                )));
            }
            backward[out as usize] = i as u8;
        }
        // A total injective map on a finite set is a bijection; backward is
        // fully populated here.
        Ok(Self { forward, backward })
    }

    /// Build from a 26-letter uppercase wiring string (`"EKMFL..."`),
    /// the format the historical tables are published in.
    pub fn from_wiring(wiring: &str) -> Result<Self> {
        if wiring.len() != N {
            return Err(EnigmaError::invalid_wiring(format!(
                "wiring string has {} characters, expected {N}",
                wiring.len()
            )));
        }
        let mut forward = [0u8; N];
        for (i, c) in wiring.chars().enumerate() {
            if !c.is_ascii_uppercase() {
                return Err(EnigmaError::invalid_wiring(format!(
                    "wiring character {c:?} is not an uppercase letter"
                )));
            }
            forward[i] = c as u8 - b'A';
        }
        Self::from_table(forward)
    }

    /// The identity permutation (flat entry wheel, empty plugboard).
    pub fn identity() -> Self {
        let mut table = [0u8; N];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            forward: table,
            backward: table,
        }
    }

    /// Forward substitution.
    #[inline]
    pub fn apply(&self, i: u8) -> u8 {
        self.forward[i as usize]
    }

    /// Backward (inverse) substitution.
    #[inline]
    pub fn invert(&self, i: u8) -> u8 {
        self.backward[i as usize]
    }

    /// The raw forward table (used by the state codec).
    pub fn forward_table(&self) -> &[u8; N] {
        &self.forward
    }

    /// True iff the permutation is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.backward
    }

    /// True iff any contact maps to itself.
    pub fn has_fixed_point(&self) -> bool {
        self.forward.iter().enumerate().any(|(i, &out)| i as u8 == out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Permutation::identity();
        for i in 0..ALPHABET_LEN {
            assert_eq!(p.apply(i), i);
            assert_eq!(p.invert(i), i);
        }
        assert!(p.is_involution());
    }

    #[test]
    fn test_forward_backward_inverse() {
        // Rotor I wiring
        let p = Permutation::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(p.invert(p.apply(i)), i);
            assert_eq!(p.apply(p.invert(i)), i);
        }
        assert_eq!(p.apply(0), 4); // A -> E
    }

    #[test]
    fn test_non_bijection_rejected() {
        // 'A' appears twice, 'B' never
        let err = Permutation::from_wiring("AAMFLGDQVZNTOWYHXUSPEICRKJ").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidWiring(_)));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(Permutation::from_wiring("ABC").is_err());
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(Permutation::from_wiring("ekmflgdqvzntowyhxuspaibrcj").is_err());
    }
}
