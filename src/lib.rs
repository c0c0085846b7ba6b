//! rotorsim — Enigma-family rotor cipher machine engine
//!
//! Simulates the signal path of the historical rotor cipher machines: a
//! chain of permutation components (plugboard, entry wheel, rotor stack,
//! reflector) through which a single symbol is substituted, combined with
//! the mechanical stepping logic that advances rotor positions between
//! symbols — double-step anomaly included.
//!
//! The engine consumes only already-normalized symbols (`A..=Z`) and
//! exposes pure state-transition and encryption operations. Text
//! normalization, persistence framing and UI concerns live with the caller.
//!
//! ```
//! use rotorsim::{Machine, MachineModel};
//!
//! let mut machine = Machine::new(MachineModel::I)?;
//! assert_eq!(machine.encrypt_str("AAAAA")?, "BDZGO");
//! # Ok::<(), rotorsim::EnigmaError>(())
//! ```

pub mod alphabet;
pub mod codec;
pub mod entry_wheel;
pub mod error;
pub mod machine;
pub mod model;
pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod state;
pub mod wiring;

// Re-export main types for convenience
pub use alphabet::{char_to_index, index_to_char, ALPHABET_LEN};
pub use codec::{decode, encode};
pub use entry_wheel::EntryWheel;
pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use model::{describe_model, list_models, MachineModel, ModelDescriptor, MODEL_COUNT};
pub use permutation::Permutation;
pub use plugboard::{PlugWarning, Plugboard};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use state::{random_state, state_from_seed, MachineState, ReflectorState, RotorSlotState};
pub use wiring::{RotorSpec, WheelSpec};
