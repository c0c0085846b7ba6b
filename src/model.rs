//! Machine model registry
//!
//! A catalogue of the supported historical variants. Each model tag maps to
//! a static [`ModelDescriptor`]: the rotor/reflector/entry-wheel inventory a
//! user may select from plus the capability flags that parameterize the one
//! shared stepping/encryption algorithm. Per-variant behavior lives in this
//! data, not in per-variant types.
//!
//! Pure lookup, no mutation. Unknown tags fail with `UnknownModel`;
//! selecting outside an inventory fails with `IndexOutOfRange` and is never
//! clamped.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, FromRepr, IntoEnumIterator};

use crate::error::{EnigmaError, Result};
use crate::wiring::{self, RotorSpec, WheelSpec};

/// Identifying tag of a supported machine variant.
///
/// The `u8` representation is the tag digit of the state codec; variants
/// must keep their discriminants stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MachineModel {
    /// Wehrmacht Enigma I
    #[strum(serialize = "I")]
    I = 0,
    /// Kriegsmarine M3
    #[strum(serialize = "M3")]
    M3 = 1,
    /// Kriegsmarine M4 (four rotor slots, thin reflectors)
    #[strum(serialize = "M4")]
    M4 = 2,
    /// Commercial Enigma D (pluggable reflector)
    #[strum(serialize = "D")]
    D = 3,
    /// Swiss K
    #[strum(serialize = "K")]
    KSwiss = 4,
    /// Railway "Rocket"
    #[strum(serialize = "Railway")]
    Railway = 5,
    /// Zählwerk G31 (cog drive, rotating reflector)
    #[strum(serialize = "G31")]
    G31 = 6,
}

/// Number of registered models (the base of the codec's tag digit).
pub const MODEL_COUNT: u8 = 7;

/// Static descriptor of one machine variant: component inventory plus
/// stepping-policy flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub model: MachineModel,
    pub display_name: &'static str,
    /// Rotors selectable for the stepping slots (0..=2).
    pub rotor_inventory: &'static [RotorSpec],
    /// Rotors selectable for the greek slot (slot 3); empty for 3-slot models.
    pub greek_inventory: &'static [RotorSpec],
    pub reflector_inventory: &'static [WheelSpec],
    pub entry_wheel: &'static WheelSpec,
    /// 3 or 4.
    pub rotor_slot_count: u8,
    pub has_plugboard: bool,
    /// Reflector rewirable pair by pair; its wiring is part of the state.
    pub has_pluggable_reflector: bool,
    /// Reflector rotation/ring operator-settable (commercial models).
    pub reflector_settable: bool,
    /// Reflector advances when slot 2 steps onto its notch.
    pub reflector_rotates: bool,
    /// Lever-drive double-step anomaly present.
    pub anomaly_enabled: bool,
}

impl ModelDescriptor {
    /// The rotor inventory for a given slot (greek slot has its own).
    pub fn slot_inventory(&self, slot: usize) -> &'static [RotorSpec] {
        if slot == 3 {
            self.greek_inventory
        } else {
            self.rotor_inventory
        }
    }

    /// Resolve a rotor selection for a slot, or `IndexOutOfRange`.
    pub fn rotor(&self, slot: usize, index: u8) -> Result<&'static RotorSpec> {
        if slot >= self.rotor_slot_count as usize {
            return Err(EnigmaError::index_out_of_range(format!(
                "model {} has {} rotor slots, slot {slot} requested",
                self.model, self.rotor_slot_count
            )));
        }
        let inventory = self.slot_inventory(slot);
        inventory.get(index as usize).ok_or_else(|| {
            EnigmaError::index_out_of_range(format!(
                "rotor {index} of {} in slot {slot} of model {}",
                inventory.len(),
                self.model
            ))
        })
    }

    /// Resolve a reflector selection, or `IndexOutOfRange`.
    pub fn reflector(&self, index: u8) -> Result<&'static WheelSpec> {
        self.reflector_inventory.get(index as usize).ok_or_else(|| {
            EnigmaError::index_out_of_range(format!(
                "reflector {index} of {} in model {}",
                self.reflector_inventory.len(),
                self.model
            ))
        })
    }
}

// ============================================================================
// Registry data
// ============================================================================

const ROTORS_I: &[RotorSpec] = &[
    wiring::ROTOR_I,
    wiring::ROTOR_II,
    wiring::ROTOR_III,
    wiring::ROTOR_IV,
    wiring::ROTOR_V,
];

const ROTORS_M3_M4: &[RotorSpec] = &[
    wiring::ROTOR_I,
    wiring::ROTOR_II,
    wiring::ROTOR_III,
    wiring::ROTOR_IV,
    wiring::ROTOR_V,
    wiring::ROTOR_VI,
    wiring::ROTOR_VII,
    wiring::ROTOR_VIII,
];

const GREEKS_M4: &[RotorSpec] = &[wiring::ROTOR_BETA, wiring::ROTOR_GAMMA];

const ROTORS_D: &[RotorSpec] = &[wiring::ROTOR_D_I, wiring::ROTOR_D_II, wiring::ROTOR_D_III];
const ROTORS_K: &[RotorSpec] = &[wiring::ROTOR_K_I, wiring::ROTOR_K_II, wiring::ROTOR_K_III];
const ROTORS_R: &[RotorSpec] = &[wiring::ROTOR_R_I, wiring::ROTOR_R_II, wiring::ROTOR_R_III];
const ROTORS_G: &[RotorSpec] = &[wiring::ROTOR_G_I, wiring::ROTOR_G_II, wiring::ROTOR_G_III];

const DESC_I: ModelDescriptor = ModelDescriptor {
    model: MachineModel::I,
    display_name: "Enigma I",
    rotor_inventory: ROTORS_I,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_A, wiring::UKW_B, wiring::UKW_C],
    entry_wheel: &wiring::ETW_ABCDEF,
    rotor_slot_count: 3,
    has_plugboard: true,
    has_pluggable_reflector: false,
    reflector_settable: false,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_M3: ModelDescriptor = ModelDescriptor {
    model: MachineModel::M3,
    display_name: "Enigma M3",
    rotor_inventory: ROTORS_M3_M4,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_B, wiring::UKW_C],
    entry_wheel: &wiring::ETW_ABCDEF,
    rotor_slot_count: 3,
    has_plugboard: true,
    has_pluggable_reflector: false,
    reflector_settable: false,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_M4: ModelDescriptor = ModelDescriptor {
    model: MachineModel::M4,
    display_name: "Enigma M4",
    rotor_inventory: ROTORS_M3_M4,
    greek_inventory: GREEKS_M4,
    reflector_inventory: &[wiring::UKW_B_THIN, wiring::UKW_C_THIN],
    entry_wheel: &wiring::ETW_ABCDEF,
    rotor_slot_count: 4,
    has_plugboard: true,
    has_pluggable_reflector: false,
    reflector_settable: false,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_D: ModelDescriptor = ModelDescriptor {
    model: MachineModel::D,
    display_name: "Enigma D",
    rotor_inventory: ROTORS_D,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_D],
    entry_wheel: &wiring::ETW_QWERTZ,
    rotor_slot_count: 3,
    has_plugboard: false,
    has_pluggable_reflector: true,
    reflector_settable: true,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_K: ModelDescriptor = ModelDescriptor {
    model: MachineModel::KSwiss,
    display_name: "Swiss K",
    rotor_inventory: ROTORS_K,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_K],
    entry_wheel: &wiring::ETW_QWERTZ,
    rotor_slot_count: 3,
    has_plugboard: false,
    has_pluggable_reflector: false,
    reflector_settable: true,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_R: ModelDescriptor = ModelDescriptor {
    model: MachineModel::Railway,
    display_name: "Railway Enigma",
    rotor_inventory: ROTORS_R,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_R],
    entry_wheel: &wiring::ETW_QWERTZ,
    rotor_slot_count: 3,
    has_plugboard: false,
    has_pluggable_reflector: false,
    reflector_settable: true,
    reflector_rotates: false,
    anomaly_enabled: true,
};

const DESC_G31: ModelDescriptor = ModelDescriptor {
    model: MachineModel::G31,
    display_name: "Zählwerk G31",
    rotor_inventory: ROTORS_G,
    greek_inventory: &[],
    reflector_inventory: &[wiring::UKW_G],
    entry_wheel: &wiring::ETW_QWERTZ,
    rotor_slot_count: 3,
    has_plugboard: false,
    has_pluggable_reflector: false,
    reflector_settable: true,
    reflector_rotates: true,
    // Cog drive: no lever, no double step.
    anomaly_enabled: false,
};

impl MachineModel {
    /// The static descriptor for this model.
    pub fn descriptor(self) -> &'static ModelDescriptor {
        match self {
            Self::I => &DESC_I,
            Self::M3 => &DESC_M3,
            Self::M4 => &DESC_M4,
            Self::D => &DESC_D,
            Self::KSwiss => &DESC_K,
            Self::Railway => &DESC_R,
            Self::G31 => &DESC_G31,
        }
    }

    /// Recover a model from its codec tag digit.
    pub fn from_tag(tag: u8) -> Result<Self> {
        Self::from_repr(tag)
            .ok_or_else(|| EnigmaError::malformed_state(format!("unknown model tag {tag}")))
    }
}

/// All registered model descriptors, for UI population.
pub fn list_models() -> Vec<&'static ModelDescriptor> {
    MachineModel::iter().map(MachineModel::descriptor).collect()
}

/// Look up a model descriptor by its string tag.
pub fn describe_model(tag: &str) -> Result<&'static ModelDescriptor> {
    MachineModel::from_str(tag)
        .map(MachineModel::descriptor)
        .map_err(|_| EnigmaError::unknown_model(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete() {
        let models = list_models();
        assert_eq!(models.len(), MODEL_COUNT as usize);
        for desc in models {
            assert!(matches!(desc.rotor_slot_count, 3 | 4));
            assert!(!desc.rotor_inventory.is_empty());
            assert!(!desc.reflector_inventory.is_empty());
            assert_eq!(desc.rotor_slot_count == 4, !desc.greek_inventory.is_empty());
        }
    }

    #[test]
    fn test_tag_roundtrip() {
        for model in MachineModel::iter() {
            assert_eq!(MachineModel::from_tag(model as u8).unwrap(), model);
            assert_eq!(describe_model(&model.to_string()).unwrap().model, model);
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(matches!(
            describe_model("M17"),
            Err(EnigmaError::UnknownModel(_))
        ));
        assert!(MachineModel::from_tag(MODEL_COUNT).is_err());
    }

    #[test]
    fn test_out_of_inventory_selection_rejected() {
        let desc = MachineModel::I.descriptor();
        assert!(desc.rotor(0, 4).is_ok());
        assert!(matches!(
            desc.rotor(0, 5),
            Err(EnigmaError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            desc.reflector(3),
            Err(EnigmaError::IndexOutOfRange(_))
        ));
        assert!(matches!(
            desc.rotor(3, 0),
            Err(EnigmaError::IndexOutOfRange(_))
        ));
    }

    #[test]
    fn test_m4_greek_slot_inventory() {
        let desc = MachineModel::M4.descriptor();
        assert_eq!(desc.rotor(3, 0).unwrap().name, "Beta");
        assert_eq!(desc.rotor(3, 1).unwrap().name, "Gamma");
        assert!(desc.rotor(3, 2).is_err());
        // Greek rotors never step.
        assert!(desc.rotor(3, 0).unwrap().notches.is_empty());
    }

    #[test]
    fn test_serde_tag_roundtrip() {
        let json = serde_json::to_string(&MachineModel::M4).unwrap();
        let parsed: MachineModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MachineModel::M4);
    }
}
