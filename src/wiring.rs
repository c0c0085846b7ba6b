//! Static historical wiring tables
//!
//! Every rotor, reflector and entry-wheel wiring known to the model
//! registry, straight from the published tables. One flat data module
//! replaces the per-component subclass hierarchies such tables usually
//! accrete: a wired component is a `Permutation` built from one of these
//! entries, not a type of its own.
//!
//! Notch positions use the post-step convention: the value recorded is the
//! rotation a rotor has just stepped INTO when it carries its neighbour,
//! i.e. the historical turnover window letter plus one. Rotor I's turnover
//! letter Q is therefore stored as 17 (R).

/// A selectable rotor: wiring plus turnover notch positions.
///
/// `notches` may be empty — the M4 greek rotors (Beta/Gamma) are fixed
/// "thin" rotors that never carry a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notches: &'static [u8],
}

/// A selectable reflector or entry wheel: a bare wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSpec {
    pub name: &'static str,
    pub wiring: &'static str,
}

// ============================================================================
// Wehrmacht / Kriegsmarine rotors (Enigma I, M3, M4)
// ============================================================================

pub const ROTOR_I: RotorSpec = RotorSpec {
    name: "I",
    wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notches: &[17], // turnover Q
};
pub const ROTOR_II: RotorSpec = RotorSpec {
    name: "II",
    wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notches: &[5], // turnover E
};
pub const ROTOR_III: RotorSpec = RotorSpec {
    name: "III",
    wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notches: &[22], // turnover V
};
pub const ROTOR_IV: RotorSpec = RotorSpec {
    name: "IV",
    wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
    notches: &[10], // turnover J
};
pub const ROTOR_V: RotorSpec = RotorSpec {
    name: "V",
    wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
    notches: &[0], // turnover Z
};
pub const ROTOR_VI: RotorSpec = RotorSpec {
    name: "VI",
    wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
    notches: &[0, 13], // turnovers Z and M
};
pub const ROTOR_VII: RotorSpec = RotorSpec {
    name: "VII",
    wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
    notches: &[0, 13],
};
pub const ROTOR_VIII: RotorSpec = RotorSpec {
    name: "VIII",
    wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
    notches: &[0, 13],
};

/// M4 greek-slot rotors: settable by hand, never stepped by the cascade.
pub const ROTOR_BETA: RotorSpec = RotorSpec {
    name: "Beta",
    wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS",
    notches: &[],
};
pub const ROTOR_GAMMA: RotorSpec = RotorSpec {
    name: "Gamma",
    wiring: "FSOKANUERHMBTIYCWLQPZXVGJD",
    notches: &[],
};

// ============================================================================
// Wehrmacht / Kriegsmarine reflectors
// ============================================================================

pub const UKW_A: WheelSpec = WheelSpec {
    name: "UKW-A",
    wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
};
pub const UKW_B: WheelSpec = WheelSpec {
    name: "UKW-B",
    wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
};
pub const UKW_C: WheelSpec = WheelSpec {
    name: "UKW-C",
    wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
};
pub const UKW_B_THIN: WheelSpec = WheelSpec {
    name: "UKW-B thin",
    wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS",
};
pub const UKW_C_THIN: WheelSpec = WheelSpec {
    name: "UKW-C thin",
    wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
};

// ============================================================================
// Commercial Enigma D (also the default wiring of the pluggable reflector)
// ============================================================================

pub const ROTOR_D_I: RotorSpec = RotorSpec {
    name: "D-I",
    wiring: "LPGSZMHAEOQKVXRFYBUTNICJDW",
    notches: &[25], // turnover Y
};
pub const ROTOR_D_II: RotorSpec = RotorSpec {
    name: "D-II",
    wiring: "SLVGBTFXJQOHEWIRZYAMKPCNDU",
    notches: &[5], // turnover E
};
pub const ROTOR_D_III: RotorSpec = RotorSpec {
    name: "D-III",
    wiring: "CJGDPSHKTURAWZXFMYNQOBVLIE",
    notches: &[14], // turnover N
};
pub const UKW_D: WheelSpec = WheelSpec {
    name: "UKW-D",
    wiring: "IMETCGFRAYSQBZXWLHKDVUPOJN",
};

// ============================================================================
// Swiss K
// ============================================================================

pub const ROTOR_K_I: RotorSpec = RotorSpec {
    name: "K-I",
    wiring: "PEZUOHXSCVFMTBGLRINQJWAYDK",
    notches: &[25], // turnover Y
};
pub const ROTOR_K_II: RotorSpec = RotorSpec {
    name: "K-II",
    wiring: "ZOUESYDKFWPCIQXHMVBLGNJRAT",
    notches: &[5], // turnover E
};
pub const ROTOR_K_III: RotorSpec = RotorSpec {
    name: "K-III",
    wiring: "EHRVXGAOBQUSIMZFLYNWKTPDJC",
    notches: &[14], // turnover N
};
pub const UKW_K: WheelSpec = WheelSpec {
    name: "UKW-K",
    wiring: "IMETCGFRAYSQBZXWLHKDVUPOJN",
};

// ============================================================================
// Railway ("Rocket")
// ============================================================================

pub const ROTOR_R_I: RotorSpec = RotorSpec {
    name: "R-I",
    wiring: "JGDQOXUSCAMIFRVTPNEWKBLZYH",
    notches: &[14], // turnover N
};
pub const ROTOR_R_II: RotorSpec = RotorSpec {
    name: "R-II",
    wiring: "NTZPSFBOKMWRCJDIVLAEYUXHGQ",
    notches: &[5], // turnover E
};
pub const ROTOR_R_III: RotorSpec = RotorSpec {
    name: "R-III",
    wiring: "JVIUBHTCDYAKEQZPOSGXNRMWFL",
    notches: &[25], // turnover Y
};
pub const UKW_R: WheelSpec = WheelSpec {
    name: "UKW-R",
    wiring: "QYHOGNECVPUZTFDJAXWMKISRBL",
};

// ============================================================================
// Zählwerk G31 (cog-driven, multi-notch, rotating reflector)
// ============================================================================

pub const ROTOR_G_I: RotorSpec = RotorSpec {
    name: "G-I",
    wiring: "LPGSZMHAEOQKVXRFYBUTNICJDW",
    // turnovers S U V W Z A B C E F G I K L O P Q
    notches: &[19, 21, 22, 23, 0, 1, 2, 3, 5, 6, 7, 9, 11, 12, 15, 16, 17],
};
pub const ROTOR_G_II: RotorSpec = RotorSpec {
    name: "G-II",
    wiring: "SLVGBTFXJQOHEWIRZYAMKPCNDU",
    // turnovers S T V Y Z A C D F G H K M N Q
    notches: &[19, 20, 22, 25, 0, 1, 3, 4, 6, 7, 8, 11, 13, 14, 17],
};
pub const ROTOR_G_III: RotorSpec = RotorSpec {
    name: "G-III",
    wiring: "CJGDPSHKTURAWZXFMYNQOBVLIE",
    // turnovers U W X A E F H K M N R
    notches: &[21, 23, 24, 1, 5, 6, 8, 11, 13, 14, 18],
};
pub const UKW_G: WheelSpec = WheelSpec {
    name: "UKW-G",
    wiring: "IMETCGFRAYSQBZXWLHKDVUPOJN",
};

// ============================================================================
// Entry wheels
// ============================================================================

/// Flat entry wheel of the Wehrmacht machines (A maps to contact 0).
pub const ETW_ABCDEF: WheelSpec = WheelSpec {
    name: "ETW-ABCDEF",
    wiring: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
};

/// Keyboard-order entry wheel of the commercial machines.
pub const ETW_QWERTZ: WheelSpec = WheelSpec {
    name: "ETW-QWERTZ",
    wiring: "QWERTZUIOASDFGHJKPYXCVBNML",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_LEN;
    use crate::permutation::Permutation;

    fn all_rotors() -> Vec<RotorSpec> {
        vec![
            ROTOR_I, ROTOR_II, ROTOR_III, ROTOR_IV, ROTOR_V, ROTOR_VI, ROTOR_VII, ROTOR_VIII,
            ROTOR_BETA, ROTOR_GAMMA, ROTOR_D_I, ROTOR_D_II, ROTOR_D_III, ROTOR_K_I, ROTOR_K_II,
            ROTOR_K_III, ROTOR_R_I, ROTOR_R_II, ROTOR_R_III, ROTOR_G_I, ROTOR_G_II, ROTOR_G_III,
        ]
    }

    fn all_reflectors() -> Vec<WheelSpec> {
        vec![
            UKW_A, UKW_B, UKW_C, UKW_B_THIN, UKW_C_THIN, UKW_D, UKW_K, UKW_R, UKW_G,
        ]
    }

    #[test]
    fn test_rotor_tables_are_bijections() {
        for spec in all_rotors() {
            let perm = Permutation::from_wiring(spec.wiring)
                .unwrap_or_else(|e| panic!("rotor {}: {e}", spec.name));
            for i in 0..ALPHABET_LEN {
                assert_eq!(perm.invert(perm.apply(i)), i, "rotor {}", spec.name);
            }
        }
    }

    #[test]
    fn test_rotor_notches_in_range() {
        for spec in all_rotors() {
            for &n in spec.notches {
                assert!(n < ALPHABET_LEN, "rotor {} notch {n}", spec.name);
            }
        }
    }

    #[test]
    fn test_reflector_tables_are_fixed_point_free_involutions() {
        for spec in all_reflectors() {
            let perm = Permutation::from_wiring(spec.wiring)
                .unwrap_or_else(|e| panic!("reflector {}: {e}", spec.name));
            assert!(perm.is_involution(), "reflector {} not involutive", spec.name);
            assert!(!perm.has_fixed_point(), "reflector {} has a fixed point", spec.name);
        }
    }

    #[test]
    fn test_entry_wheel_tables_are_bijections() {
        for spec in [ETW_ABCDEF, ETW_QWERTZ] {
            let perm = Permutation::from_wiring(spec.wiring)
                .unwrap_or_else(|e| panic!("entry wheel {}: {e}", spec.name));
            for i in 0..ALPHABET_LEN {
                assert_eq!(perm.apply(perm.invert(i)), i, "entry wheel {}", spec.name);
            }
        }
    }
}
