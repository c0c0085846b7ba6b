//! Machine orchestration
//!
//! A [`Machine`] owns one concrete set of components built from a model
//! descriptor and a [`MachineState`], runs the stepping state machine
//! before each symbol and pushes the symbol through the signal path:
//!
//! ```text
//! plugboard → entry wheel → rotors (fast→slow) → reflector
//!           → rotors (slow→fast) → entry wheel → plugboard
//! ```
//!
//! # Design
//!
//! - **Single stepping algorithm**: variant differences (slot count,
//!   anomaly, rotating reflector) are descriptor flags, not overrides
//! - **Instance state only**: nothing is shared between machines
//! - **Atomic restore**: `restore` builds every component from the snapshot
//!   before touching the live machine, so a bad snapshot changes nothing

use tracing::debug;

use crate::alphabet::{char_to_index, index_to_char};
use crate::entry_wheel::EntryWheel;
use crate::error::Result;
use crate::model::{MachineModel, ModelDescriptor};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::state::{MachineState, ReflectorState, RotorSlotState};

/// One concrete rotor cipher machine with mutable stepping state.
///
/// Owned exclusively by its caller; no internal locking. Encrypting a
/// message is an ordered fold — the state after symbol `k` is required
/// input for symbol `k+1`.
#[derive(Debug, Clone)]
pub struct Machine {
    descriptor: &'static ModelDescriptor,
    /// Slot 0 = rightmost/fastest.
    rotors: Vec<Rotor>,
    /// Inventory index each slot was built from (a rotor does not know its
    /// own catalogue position).
    rotor_indices: Vec<u8>,
    reflector: Reflector,
    reflector_index: u8,
    entry_wheel: EntryWheel,
    plugboard: Option<Plugboard>,
    pending_anomaly: bool,
}

struct Components {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    entry_wheel: EntryWheel,
    plugboard: Option<Plugboard>,
}

fn build_components(desc: &'static ModelDescriptor, state: &MachineState) -> Result<Components> {
    state.validate(desc)?;

    let mut rotors = Vec::with_capacity(state.rotors.len());
    for (slot, rotor_state) in state.rotors.iter().enumerate() {
        let spec = desc.rotor(slot, rotor_state.index)?;
        rotors.push(Rotor::new(spec, rotor_state.rotation, rotor_state.ring_setting)?);
    }

    let reflector = match &state.reflector_wiring {
        Some(table) => {
            Reflector::from_table(*table, state.reflector.rotation, state.reflector.ring_setting)?
        }
        None => Reflector::new(
            desc.reflector(state.reflector.index)?,
            state.reflector.rotation,
            state.reflector.ring_setting,
        )?,
    };

    let entry_wheel = EntryWheel::new(desc.entry_wheel)?;
    let plugboard = match &state.plugboard {
        Some(table) => {
            let pairs: Vec<(u8, u8)> = table
                .iter()
                .enumerate()
                .filter(|&(i, &out)| (i as u8) < out)
                .map(|(i, &out)| (i as u8, out))
                .collect();
            Some(Plugboard::from_pairs(&pairs))
        }
        None => None,
    };

    Ok(Components {
        rotors,
        reflector,
        entry_wheel,
        plugboard,
    })
}

impl Machine {
    /// Build a machine in the model's reset state.
    pub fn new(model: MachineModel) -> Result<Self> {
        Self::from_state(model, &MachineState::default_for(model))
    }

    /// Build a machine from an explicit snapshot.
    pub fn from_state(model: MachineModel, state: &MachineState) -> Result<Self> {
        let descriptor = model.descriptor();
        let parts = build_components(descriptor, state)?;
        Ok(Self {
            descriptor,
            rotors: parts.rotors,
            rotor_indices: state.rotors.iter().map(|r| r.index).collect(),
            reflector: parts.reflector,
            reflector_index: state.reflector.index,
            entry_wheel: parts.entry_wheel,
            plugboard: parts.plugboard,
            pending_anomaly: false,
        })
    }

    pub fn model(&self) -> MachineModel {
        self.descriptor.model
    }

    pub fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    /// Read the full current configuration into a snapshot.
    pub fn snapshot(&self) -> MachineState {
        let rotors = self
            .rotors
            .iter()
            .enumerate()
            .map(|(slot, rotor)| RotorSlotState {
                index: self.rotor_indices[slot],
                rotation: rotor.rotation(),
                ring_setting: rotor.ring_setting(),
            })
            .collect();
        MachineState {
            rotors,
            reflector: ReflectorState {
                index: self.reflector_index,
                rotation: self.reflector.rotation(),
                ring_setting: self.reflector.ring_setting(),
            },
            plugboard: self.plugboard.as_ref().map(Plugboard::wiring_table),
            reflector_wiring: self
                .descriptor
                .has_pluggable_reflector
                .then(|| self.reflector.wiring_table()),
        }
    }

    /// Replace the full configuration from a snapshot, atomically: the
    /// snapshot is validated and every component rebuilt before the live
    /// machine is touched, so a rejected snapshot leaves it unchanged.
    pub fn restore(&mut self, state: &MachineState) -> Result<()> {
        let parts = build_components(self.descriptor, state)?;
        debug!(model = %self.descriptor.model, "restoring machine state");
        self.rotors = parts.rotors;
        self.reflector = parts.reflector;
        self.entry_wheel = parts.entry_wheel;
        self.plugboard = parts.plugboard;
        self.rotor_indices = state.rotors.iter().map(|r| r.index).collect();
        self.reflector_index = state.reflector.index;
        self.pending_anomaly = false;
        Ok(())
    }

    /// Run the stepping state machine: invoked once before each symbol.
    fn advance(&mut self) {
        // Slot 0 always steps.
        self.rotors[0].step();

        let anomaly = self.pending_anomaly && self.descriptor.anomaly_enabled;
        if self.rotors[0].is_at_notch() || anomaly {
            self.rotors[1].step();
            // Arm the double step one symbol in advance.
            self.pending_anomaly = self.rotors[1].is_one_before_notch();

            // The carry to slot 2 fires only when slot 1 just stepped onto
            // its notch; a rotor parked on a notch does not keep carrying.
            if self.rotors[1].is_at_notch() {
                self.rotors[2].step();
                if self.descriptor.reflector_rotates && self.rotors[2].is_at_notch() {
                    self.reflector.step();
                }
            }
        }
        // The cascade never reaches the greek slot of a 4-rotor machine.
    }

    /// Encrypt one contact index: advance the stepping state, then run the
    /// signal path. Self-reciprocal: the same state sequence decrypts.
    pub fn encrypt_index(&mut self, x: u8) -> u8 {
        self.advance();

        let mut x = x;
        if let Some(board) = &self.plugboard {
            x = board.apply(x);
        }
        x = self.entry_wheel.encrypt_forward(x);
        for rotor in &self.rotors {
            x = rotor.encrypt_forward(x);
        }
        x = self.reflector.apply(x);
        for rotor in self.rotors.iter().rev() {
            x = rotor.encrypt_backward(x);
        }
        x = self.entry_wheel.encrypt_backward(x);
        if let Some(board) = &self.plugboard {
            x = board.apply(x);
        }
        x
    }

    /// Encrypt one already-normalized symbol (`A..=Z`).
    pub fn encrypt_char(&mut self, c: char) -> Result<char> {
        Ok(index_to_char(self.encrypt_index(char_to_index(c)?)))
    }

    /// Encrypt a whole normalized message: an ordered fold of
    /// [`encrypt_char`](Self::encrypt_char).
    pub fn encrypt_str(&mut self, text: &str) -> Result<String> {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Current rotation of a rotor slot (for display and tests).
    pub fn rotation(&self, slot: usize) -> u8 {
        self.rotors[slot].rotation()
    }

    /// Current rotation of the reflector.
    pub fn reflector_rotation(&self) -> u8 {
        self.reflector.rotation()
    }
}
