//! Entry wheel (Eintrittswalze)
//!
//! The static wiring between the external alphabet and the first rotor.
//! The Wehrmacht machines wired it flat (A to contact 0); the commercial
//! machines wired it in keyboard order. The published tables list, for each
//! contact position, the keyboard letter connected to it, so the inbound
//! direction is the table's inverse.

use crate::error::Result;
use crate::permutation::Permutation;
use crate::wiring::WheelSpec;

/// The stateless wiring between keyboard alphabet and rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWheel {
    wiring: Permutation,
}

impl EntryWheel {
    pub fn new(spec: &WheelSpec) -> Result<Self> {
        Ok(Self {
            wiring: Permutation::from_wiring(spec.wiring)?,
        })
    }

    /// Keyboard letter index to rotor contact (inbound).
    #[inline]
    pub fn encrypt_forward(&self, i: u8) -> u8 {
        self.wiring.invert(i)
    }

    /// Rotor contact back to lamp letter index (outbound).
    #[inline]
    pub fn encrypt_backward(&self, i: u8) -> u8 {
        self.wiring.apply(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_LEN;
    use crate::wiring::{ETW_ABCDEF, ETW_QWERTZ};

    #[test]
    fn test_flat_wheel_is_identity() {
        let etw = EntryWheel::new(&ETW_ABCDEF).unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(etw.encrypt_forward(i), i);
            assert_eq!(etw.encrypt_backward(i), i);
        }
    }

    #[test]
    fn test_qwertz_roundtrip() {
        let etw = EntryWheel::new(&ETW_QWERTZ).unwrap();
        for i in 0..ALPHABET_LEN {
            assert_eq!(etw.encrypt_backward(etw.encrypt_forward(i)), i);
        }
        // Q is wired to contact 0.
        assert_eq!(etw.encrypt_forward(16), 0);
    }
}
