//! Machine state snapshots
//!
//! [`MachineState`] is the complete mutable snapshot needed to reproduce
//! encryption behavior bit for bit: rotor selections, rotations, ring
//! settings, reflector configuration and plug wirings. It is the unit of
//! save/restore/random-seed/share; a snapshot is validated as a whole and
//! applied atomically, never piecemeal.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::alphabet::ALPHABET_LEN;
use crate::error::{EnigmaError, Result};
use crate::model::{MachineModel, ModelDescriptor};
use crate::permutation::Permutation;

const N: usize = ALPHABET_LEN as usize;

/// Configuration of one rotor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSlotState {
    /// Index into the slot's rotor inventory.
    pub index: u8,
    pub rotation: u8,
    pub ring_setting: u8,
}

/// Configuration of the reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectorState {
    /// Index into the model's reflector inventory.
    pub index: u8,
    /// Zero unless the model's reflector is settable or rotating.
    pub rotation: u8,
    pub ring_setting: u8,
}

/// Full machine configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineState {
    /// Slot 0 first (rightmost/fastest); greek slot last on M4.
    pub rotors: Vec<RotorSlotState>,
    pub reflector: ReflectorState,
    /// Involution table of the plugboard; present iff the model has one.
    pub plugboard: Option<[u8; N]>,
    /// Rewired reflector table; present iff the reflector is pluggable.
    pub reflector_wiring: Option<[u8; N]>,
}

fn wiring_to_table(wiring: &str) -> [u8; N] {
    let mut table = [0u8; N];
    for (i, b) in wiring.bytes().enumerate() {
        table[i] = b - b'A';
    }
    table
}

fn identity_table() -> [u8; N] {
    let mut table = [0u8; N];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

impl MachineState {
    /// The reset state of a model: rotors loaded in historical order
    /// (slot 0 holds the third inventory rotor, slot 2 the first), all
    /// rotations and rings at zero, no plugs, stock reflector wiring.
    pub fn default_for(model: MachineModel) -> Self {
        let desc = model.descriptor();
        let mut rotors = Vec::with_capacity(desc.rotor_slot_count as usize);
        for slot in 0..3u8 {
            rotors.push(RotorSlotState {
                index: 2 - slot,
                rotation: 0,
                ring_setting: 0,
            });
        }
        if desc.rotor_slot_count == 4 {
            rotors.push(RotorSlotState {
                index: 0,
                rotation: 0,
                ring_setting: 0,
            });
        }
        // Enigma I defaults to UKW-B, the second entry of its inventory.
        let reflector_index = if model == MachineModel::I { 1 } else { 0 };
        Self {
            rotors,
            reflector: ReflectorState {
                index: reflector_index,
                rotation: 0,
                ring_setting: 0,
            },
            plugboard: desc.has_plugboard.then(identity_table),
            reflector_wiring: desc
                .has_pluggable_reflector
                .then(|| wiring_to_table(desc.reflector_inventory[0].wiring)),
        }
    }

    /// Check the snapshot against a model descriptor: every index inside
    /// the inventory, every rotation/ring in `[0, 26)`, plug tables present
    /// exactly where the capabilities say and structurally valid.
    pub fn validate(&self, desc: &ModelDescriptor) -> Result<()> {
        if self.rotors.len() != desc.rotor_slot_count as usize {
            return Err(EnigmaError::malformed_state(format!(
                "{} rotor slots in state, model {} has {}",
                self.rotors.len(),
                desc.model,
                desc.rotor_slot_count
            )));
        }
        for (slot, rotor) in self.rotors.iter().enumerate() {
            desc.rotor(slot, rotor.index)?;
            if rotor.rotation >= ALPHABET_LEN || rotor.ring_setting >= ALPHABET_LEN {
                return Err(EnigmaError::index_out_of_range(format!(
                    "slot {slot} rotation/ring outside the alphabet"
                )));
            }
        }
        desc.reflector(self.reflector.index)?;
        if self.reflector.rotation >= ALPHABET_LEN || self.reflector.ring_setting >= ALPHABET_LEN {
            return Err(EnigmaError::index_out_of_range(
                "reflector rotation/ring outside the alphabet",
            ));
        }
        if !(desc.reflector_settable || desc.reflector_rotates)
            && (self.reflector.rotation != 0 || self.reflector.ring_setting != 0)
        {
            return Err(EnigmaError::malformed_state(format!(
                "model {} reflector is not settable",
                desc.model
            )));
        }

        if self.plugboard.is_some() != desc.has_plugboard {
            return Err(EnigmaError::malformed_state(format!(
                "plugboard present: {}, model {} expects {}",
                self.plugboard.is_some(),
                desc.model,
                desc.has_plugboard
            )));
        }
        if let Some(table) = &self.plugboard {
            let perm = Permutation::from_table(*table)?;
            if !perm.is_involution() {
                return Err(EnigmaError::invalid_wiring(
                    "plugboard table is not an involution",
                ));
            }
        }

        if self.reflector_wiring.is_some() != desc.has_pluggable_reflector {
            return Err(EnigmaError::malformed_state(format!(
                "reflector wiring present: {}, model {} expects {}",
                self.reflector_wiring.is_some(),
                desc.model,
                desc.has_pluggable_reflector
            )));
        }
        if let Some(table) = &self.reflector_wiring {
            let perm = Permutation::from_table(*table)?;
            if !perm.is_involution() || perm.has_fixed_point() {
                return Err(EnigmaError::invalid_reflector(
                    "rewired reflector table is not a fixed-point-free involution",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Random and seeded state generation
// ============================================================================

/// Draw a full random configuration for a model.
///
/// Rotor slots are sampled without replacement per inventory group, so no
/// two slots hold the same physical rotor (the greek slot draws from its
/// own inventory). Plugboard-bearing models draw a random pair count in
/// `[0, 13)` and pair previously unpaired letters until it is reached.
pub fn random_state<R: Rng + ?Sized>(model: MachineModel, rng: &mut R) -> MachineState {
    let desc = model.descriptor();

    let stepping_indices =
        rand::seq::index::sample(rng, desc.rotor_inventory.len(), 3).into_vec();
    let mut rotors: Vec<RotorSlotState> = stepping_indices
        .into_iter()
        .map(|index| RotorSlotState {
            index: index as u8,
            rotation: rng.gen_range(0..ALPHABET_LEN),
            ring_setting: rng.gen_range(0..ALPHABET_LEN),
        })
        .collect();
    if desc.rotor_slot_count == 4 {
        rotors.push(RotorSlotState {
            index: rng.gen_range(0..desc.greek_inventory.len()) as u8,
            rotation: rng.gen_range(0..ALPHABET_LEN),
            ring_setting: rng.gen_range(0..ALPHABET_LEN),
        });
    }

    let settable = desc.reflector_settable || desc.reflector_rotates;
    let reflector = ReflectorState {
        index: rng.gen_range(0..desc.reflector_inventory.len()) as u8,
        rotation: if settable { rng.gen_range(0..ALPHABET_LEN) } else { 0 },
        ring_setting: if settable { rng.gen_range(0..ALPHABET_LEN) } else { 0 },
    };

    let plugboard = desc.has_plugboard.then(|| {
        let pair_count = rng.gen_range(0..N / 2);
        random_involution(rng, pair_count)
    });
    // A rewired reflector always carries a full set of thirteen pairs.
    let reflector_wiring = desc
        .has_pluggable_reflector
        .then(|| random_involution(rng, N / 2));

    MachineState {
        rotors,
        reflector,
        plugboard,
        reflector_wiring,
    }
}

/// Pair `pair_count` disjoint random letter pairs; the rest stay fixed.
fn random_involution<R: Rng + ?Sized>(rng: &mut R, pair_count: usize) -> [u8; N] {
    let mut letters: Vec<u8> = (0..ALPHABET_LEN).collect();
    letters.shuffle(rng);
    let mut table = identity_table();
    for pair in letters.chunks_exact(2).take(pair_count) {
        table[pair[0] as usize] = pair[1];
        table[pair[1] as usize] = pair[0];
    }
    table
}

/// Deterministically derive a configuration from seed text: the same seed
/// always yields the same state for a given model tag.
pub fn state_from_seed(model: MachineModel, seed: &str) -> MachineState {
    let digest = Sha256::digest(seed.as_bytes());
    let mut rng = ChaCha8Rng::from_seed(digest.into());
    random_state(model, &mut rng)
}
