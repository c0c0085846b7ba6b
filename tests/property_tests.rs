//! Property-based tests for rotorsim
//!
//! Uses proptest for the invariants that hold across the whole
//! configuration space rather than at hand-picked fixtures:
//!
//! - permutation bijectivity and inverse consistency
//! - plugboard involution for arbitrary pair specs
//! - encryption self-reciprocity for random machine states
//! - codec round-trips for random machine states

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rotorsim::{
    decode, encode, random_state, Machine, MachineModel, Permutation, Plugboard, ALPHABET_LEN,
};

/// Strategy for generating valid MachineModel variants
fn model_strategy() -> impl Strategy<Value = MachineModel> {
    prop_oneof![
        Just(MachineModel::I),
        Just(MachineModel::M3),
        Just(MachineModel::M4),
        Just(MachineModel::D),
        Just(MachineModel::KSwiss),
        Just(MachineModel::Railway),
        Just(MachineModel::G31),
    ]
}

/// A uniformly random permutation table from a seed.
fn shuffled_table(seed: u64) -> [u8; 26] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut table = [0u8; 26];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table.shuffle(&mut rng);
    table
}

proptest! {
    /// Any shuffled table builds, and backward is the exact inverse of
    /// forward over the full alphabet.
    #[test]
    fn permutation_inverse_consistency(seed in any::<u64>()) {
        let perm = Permutation::from_table(shuffled_table(seed)).unwrap();
        for i in 0..ALPHABET_LEN {
            prop_assert_eq!(perm.invert(perm.apply(i)), i);
            prop_assert_eq!(perm.apply(perm.invert(i)), i);
        }
    }

    /// Whatever the spec string looks like, the lossy parse yields a
    /// self-inverse plugboard.
    #[test]
    fn plugboard_parse_is_always_involutive(spec in "[A-Za-z0-9 ]{0,40}") {
        let (board, _warnings) = Plugboard::parse(&spec);
        for i in 0..ALPHABET_LEN {
            prop_assert_eq!(board.apply(board.apply(i)), i);
        }
    }

    /// A parse with no warnings plugs exactly the pairs it was given.
    #[test]
    fn plugboard_pairs_survive_clean_parse(seed in any::<u64>()) {
        let table = shuffled_table(seed);
        let pairs: Vec<(u8, u8)> = table.chunks_exact(2).take(5)
            .map(|p| (p[0].min(p[1]), p[0].max(p[1])))
            .collect();
        let spec: String = pairs
            .iter()
            .map(|&(a, b)| format!("{}{} ", (b'A' + a) as char, (b'A' + b) as char))
            .collect();

        let (board, warnings) = Plugboard::parse(&spec);
        prop_assert!(warnings.is_empty());
        for &(a, b) in &pairs {
            prop_assert_eq!(board.apply(a), b);
            prop_assert_eq!(board.apply(b), a);
        }
    }

    /// Feeding the ciphertext back through a machine restored to the same
    /// state reproduces the plaintext, for any model and configuration.
    #[test]
    fn encryption_self_reciprocity(
        model in model_strategy(),
        seed in any::<u64>(),
        message in proptest::collection::vec(0..ALPHABET_LEN, 0..40),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = random_state(model, &mut rng);
        let mut machine = Machine::from_state(model, &state).unwrap();

        let ciphertext: Vec<u8> = message.iter().map(|&i| machine.encrypt_index(i)).collect();
        machine.restore(&state).unwrap();
        let decrypted: Vec<u8> = ciphertext.iter().map(|&i| machine.encrypt_index(i)).collect();
        prop_assert_eq!(decrypted, message);
    }

    /// decode(encode(state)) is the identity for any random state.
    #[test]
    fn codec_roundtrip(model in model_strategy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = random_state(model, &mut rng);

        let value = encode(model, &state).unwrap();
        let (decoded_model, decoded_state) = decode(&value).unwrap();
        prop_assert_eq!(decoded_model, model);
        prop_assert_eq!(decoded_state, state);
    }

    /// Stepping is deterministic: two machines in the same state stay in
    /// lockstep over any input.
    #[test]
    fn stepping_lockstep(
        model in model_strategy(),
        seed in any::<u64>(),
        message in proptest::collection::vec(0..ALPHABET_LEN, 0..40),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = random_state(model, &mut rng);
        let mut a = Machine::from_state(model, &state).unwrap();
        let mut b = Machine::from_state(model, &state).unwrap();

        for &i in &message {
            prop_assert_eq!(a.encrypt_index(i), b.encrypt_index(i));
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
