//! Rotors
//!
//! A rotor is a wired permutation mounted on a rotatable body, with a letter
//! ring that can be offset from the wiring (the ring setting) and zero or
//! more turnover notches. The wiring is fixed to the rotor body; the signal
//! enters and leaves at fixed contact positions, so both substitution
//! directions shift the contact index by `(rotation - ring_setting)` on the
//! way in and shift it back on the way out.

use crate::alphabet::{normalize, ALPHABET_LEN};
use crate::error::Result;
use crate::permutation::Permutation;
use crate::wiring::RotorSpec;

/// One rotor in the stack: wiring, ring setting, rotation, notches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    notches: &'static [u8],
    ring_setting: u8,
    rotation: u8,
}

impl Rotor {
    /// Build a rotor from its registry spec at the given rotation and ring
    /// setting (both normalized into `[0, 26)`).
    pub fn new(spec: &RotorSpec, rotation: u8, ring_setting: u8) -> Result<Self> {
        Ok(Self {
            wiring: Permutation::from_wiring(spec.wiring)?,
            notches: spec.notches,
            ring_setting: ring_setting % ALPHABET_LEN,
            rotation: rotation % ALPHABET_LEN,
        })
    }

    /// Net contact offset between the machine frame and the rotor wiring.
    #[inline]
    fn offset(&self) -> i16 {
        self.rotation as i16 - self.ring_setting as i16
    }

    /// Substitute on the way in (plugboard side toward the reflector).
    pub fn encrypt_forward(&self, i: u8) -> u8 {
        let off = self.offset();
        let shifted = normalize(i as i16 + off);
        normalize(self.wiring.apply(shifted) as i16 - off)
    }

    /// Substitute on the way back out (reflector side toward the plugboard).
    pub fn encrypt_backward(&self, i: u8) -> u8 {
        let off = self.offset();
        let shifted = normalize(i as i16 + off);
        normalize(self.wiring.invert(shifted) as i16 - off)
    }

    /// Advance one position.
    pub fn step(&mut self) {
        self.rotation = (self.rotation + 1) % ALPHABET_LEN;
    }

    /// True iff the current rotation is a turnover position.
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(&self.rotation)
    }

    /// True iff the next step lands on a turnover position — the lookahead
    /// that arms the double-step anomaly.
    pub fn is_one_before_notch(&self) -> bool {
        self.notches.contains(&((self.rotation + 1) % ALPHABET_LEN))
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }
}
