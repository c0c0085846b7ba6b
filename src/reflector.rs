//! Reflectors (Umkehrwalzen)
//!
//! A reflector is a fixed-point-free involutive permutation that sends the
//! signal back through the rotor stack. The physical drum could not short a
//! contact back to itself, so a table with a fixed point is rejected
//! outright. Commercial models let the operator set the reflector's
//! rotation and ring; the cog-driven Zählwerk family even steps it; the
//! pluggable variant lets the operator rewire it pair by pair.

use crate::alphabet::{normalize, ALPHABET_LEN};
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use crate::wiring::WheelSpec;

const N: usize = ALPHABET_LEN as usize;

/// The reflecting drum at the far end of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
    rotation: u8,
    ring_setting: u8,
}

impl Reflector {
    /// Build from a registry spec. Non-settable models pass rotation and
    /// ring as zero and never change them afterwards.
    pub fn new(spec: &WheelSpec, rotation: u8, ring_setting: u8) -> Result<Self> {
        Self::from_permutation(Permutation::from_wiring(spec.wiring)?, rotation, ring_setting)
    }

    /// Build a pluggable reflector from a full rewired table.
    pub fn from_table(table: [u8; N], rotation: u8, ring_setting: u8) -> Result<Self> {
        Self::from_permutation(Permutation::from_table(table)?, rotation, ring_setting)
    }

    fn from_permutation(wiring: Permutation, rotation: u8, ring_setting: u8) -> Result<Self> {
        if !wiring.is_involution() {
            return Err(EnigmaError::invalid_reflector(
                "reflector wiring is not an involution",
            ));
        }
        if wiring.has_fixed_point() {
            return Err(EnigmaError::invalid_reflector(
                "reflector wiring maps a contact to itself",
            ));
        }
        Ok(Self {
            wiring,
            rotation: rotation % ALPHABET_LEN,
            ring_setting: ring_setting % ALPHABET_LEN,
        })
    }

    /// Reflect a contact, honouring the rotation/ring offset of the
    /// settable models (zero offset for the fixed ones).
    pub fn apply(&self, i: u8) -> u8 {
        let off = self.rotation as i16 - self.ring_setting as i16;
        let shifted = normalize(i as i16 + off);
        normalize(self.wiring.apply(shifted) as i16 - off)
    }

    /// Advance one position (rotating-reflector models only; the stepping
    /// state machine decides when).
    pub fn step(&mut self) {
        self.rotation = (self.rotation + 1) % ALPHABET_LEN;
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// The forward wiring table (for pluggable-reflector snapshots).
    pub fn wiring_table(&self) -> [u8; N] {
        *self.wiring.forward_table()
    }
}
