//! Alphabet and index arithmetic
//!
//! Every wired component operates on contact indices in `[0, ALPHABET_LEN)`.
//! This module owns the char↔index mapping for the external Latin alphabet
//! and the modular normalization used by the ring/rotation offset math,
//! which must accept negative intermediate values.

use crate::error::{EnigmaError, Result};

/// Number of contacts on every wired component (historical machines: 26).
pub const ALPHABET_LEN: u8 = 26;

/// Map an uppercase Latin letter to its contact index (`A` = 0 … `Z` = 25).
///
/// The engine consumes already-normalized symbols; anything outside `A..=Z`
/// is rejected rather than folded.
pub fn char_to_index(c: char) -> Result<u8> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        _ => Err(EnigmaError::invalid_symbol(c)),
    }
}

/// Map a contact index back to its uppercase Latin letter.
///
/// # Panics
///
/// Panics if `i >= ALPHABET_LEN`; indices produced by the engine are always
/// in range, so this indicates engine corruption, not bad user input.
pub fn index_to_char(i: u8) -> char {
    assert!(i < ALPHABET_LEN, "contact index {i} out of range");
    (b'A' + i) as char
}

/// Normalize any signed value into `[0, ALPHABET_LEN)`.
///
/// The offset arithmetic of the rotor signal path produces values in
/// roughly `[-26, 52)`; `rem_euclid` handles the full signed range.
#[inline]
pub fn normalize(value: i16) -> u8 {
    value.rem_euclid(ALPHABET_LEN as i16) as u8
}
