//! State codec
//!
//! Converts a full machine configuration to and from a single
//! unbounded-precision integer, for save/restore/seed/share use cases.
//! The textual framing of that integer (hex, application prefixes) belongs
//! to the caller; this module owns only the number.
//!
//! # Encoding
//!
//! Mixed-radix positional encoding: starting from zero, repeatedly
//! `value = value * base + digit` over the model's fixed field schema, with
//! each field's base equal to its domain size (26 for rotations and ring
//! settings, the inventory length for selection indices). The model tag is
//! appended last with base [`MODEL_COUNT`], which makes it the
//! least-significant digit — so `decode` can identify the model with the
//! first `mod` before it knows anything else about the number.
//!
//! Round-trip law: `decode(encode(m, s)) == (m, s)` for every valid state.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::alphabet::ALPHABET_LEN;
use crate::error::{EnigmaError, Result};
use crate::model::{MachineModel, ModelDescriptor, MODEL_COUNT};
use crate::state::{MachineState, ReflectorState, RotorSlotState};

const N: usize = ALPHABET_LEN as usize;
const ALPHA: u64 = ALPHABET_LEN as u64;

/// The per-field digit bases of a model's schema, in append order.
fn field_bases(desc: &ModelDescriptor) -> Vec<u64> {
    let mut bases = Vec::new();
    for slot in 0..desc.rotor_slot_count as usize {
        bases.push(desc.slot_inventory(slot).len() as u64);
        bases.push(ALPHA);
        bases.push(ALPHA);
    }
    bases.push(desc.reflector_inventory.len() as u64);
    if desc.reflector_settable || desc.reflector_rotates {
        bases.push(ALPHA);
        bases.push(ALPHA);
    }
    if desc.has_pluggable_reflector {
        bases.extend(std::iter::repeat(ALPHA).take(N));
    }
    if desc.has_plugboard {
        bases.extend(std::iter::repeat(ALPHA).take(N));
    }
    bases
}

/// The state's digits in the same append order as [`field_bases`].
fn state_digits(desc: &ModelDescriptor, state: &MachineState) -> Vec<u64> {
    let mut digits = Vec::new();
    for rotor in &state.rotors {
        digits.push(rotor.index as u64);
        digits.push(rotor.rotation as u64);
        digits.push(rotor.ring_setting as u64);
    }
    digits.push(state.reflector.index as u64);
    if desc.reflector_settable || desc.reflector_rotates {
        digits.push(state.reflector.rotation as u64);
        digits.push(state.reflector.ring_setting as u64);
    }
    if let Some(table) = &state.reflector_wiring {
        digits.extend(table.iter().map(|&d| d as u64));
    }
    if let Some(table) = &state.plugboard {
        digits.extend(table.iter().map(|&d| d as u64));
    }
    digits
}

/// Rebuild a state from decoded digits (append order). The digits are
/// range-valid by construction; structural validity is checked afterwards.
fn digits_to_state(desc: &ModelDescriptor, digits: &[u64]) -> MachineState {
    let mut iter = digits.iter().copied().map(|d| d as u8);
    let mut next = || iter.next().expect("schema and digit count agree");

    let rotors = (0..desc.rotor_slot_count)
        .map(|_| RotorSlotState {
            index: next(),
            rotation: next(),
            ring_setting: next(),
        })
        .collect();

    let index = next();
    let (rotation, ring_setting) = if desc.reflector_settable || desc.reflector_rotates {
        (next(), next())
    } else {
        (0, 0)
    };
    let reflector = ReflectorState {
        index,
        rotation,
        ring_setting,
    };

    let mut read_table = || {
        let mut table = [0u8; N];
        for slot in table.iter_mut() {
            *slot = next();
        }
        table
    };
    let reflector_wiring = desc.has_pluggable_reflector.then(&mut read_table);
    let plugboard = desc.has_plugboard.then(&mut read_table);

    MachineState {
        rotors,
        reflector,
        plugboard,
        reflector_wiring,
    }
}

/// Serialize a snapshot into one integer that also identifies its model.
pub fn encode(model: MachineModel, state: &MachineState) -> Result<BigUint> {
    let desc = model.descriptor();
    state.validate(desc)?;

    let bases = field_bases(desc);
    let digits = state_digits(desc, state);
    debug_assert_eq!(bases.len(), digits.len());

    let mut value = BigUint::zero();
    for (&digit, &base) in digits.iter().zip(&bases) {
        value = value * base + digit;
    }
    Ok(value * u64::from(MODEL_COUNT) + u64::from(model as u8))
}

/// Recover `(model, state)` from an encoded integer.
///
/// Fails with `MalformedEncodedState` if the tag digit is unknown, the
/// value holds more digits than the model's schema, or a decoded wiring
/// table is structurally invalid. Nothing is ever partially applied.
pub fn decode(value: &BigUint) -> Result<(MachineModel, MachineState)> {
    let mut value = value.clone();

    let tag = (&value % u64::from(MODEL_COUNT))
        .to_u8()
        .expect("tag digit below MODEL_COUNT");
    value /= u64::from(MODEL_COUNT);
    let model = MachineModel::from_tag(tag)?;
    let desc = model.descriptor();

    // Fields come off the integer in reverse append order.
    let bases = field_bases(desc);
    let mut digits = vec![0u64; bases.len()];
    for (i, &base) in bases.iter().enumerate().rev() {
        digits[i] = (&value % base).to_u64().expect("digit below its base");
        value /= base;
    }
    if !value.is_zero() {
        return Err(EnigmaError::malformed_state(
            "value holds more digits than the model schema",
        ));
    }

    let state = digits_to_state(desc, &digits);
    state
        .validate(desc)
        .map_err(|e| EnigmaError::malformed_state(e.to_string()))?;
    Ok((model, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_state_roundtrip_every_model() {
        for model in MachineModel::iter() {
            let state = MachineState::default_for(model);
            let value = encode(model, &state).unwrap();
            let (decoded_model, decoded_state) = decode(&value).unwrap();
            assert_eq!(decoded_model, model);
            assert_eq!(decoded_state, state);
        }
    }

    #[test]
    fn test_tag_is_least_significant_digit() {
        for model in MachineModel::iter() {
            let value = encode(model, &MachineState::default_for(model)).unwrap();
            let tag = (&value % u64::from(MODEL_COUNT)).to_u8().unwrap();
            assert_eq!(tag, model as u8);
        }
    }

    #[test]
    fn test_excess_digits_rejected() {
        let model = MachineModel::M3;
        let value = encode(model, &MachineState::default_for(model)).unwrap();
        // Push a foreign digit above the schema.
        let mut bases_product = BigUint::from(u64::from(MODEL_COUNT));
        for base in field_bases(model.descriptor()) {
            bases_product *= base;
        }
        let corrupt = value + bases_product;
        assert!(matches!(
            decode(&corrupt),
            Err(EnigmaError::MalformedEncodedState(_))
        ));
    }

    #[test]
    fn test_structurally_invalid_digits_rejected() {
        // Value zero decodes to model I with an all-zero plugboard table,
        // which is not an involution.
        assert!(matches!(
            decode(&BigUint::zero()),
            Err(EnigmaError::MalformedEncodedState(_))
        ));
    }

    #[test]
    fn test_distinct_states_encode_distinctly() {
        let model = MachineModel::I;
        let a = MachineState::default_for(model);
        let mut b = a.clone();
        b.rotors[0].rotation = 1;
        assert_ne!(encode(model, &a).unwrap(), encode(model, &b).unwrap());
    }
}
