use std::collections::HashSet;

use number_guesser::digit::parse_digits;
use number_guesser::{generate_target, Digit, GameError, Target, ALPHABET_SIZE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_length_target() {
    let mut rng = StdRng::seed_from_u64(7);
    let target = generate_target(&mut rng, 4).unwrap();
    assert_eq!(target.len(), 4);
}

#[test]
fn test_full_alphabet_target_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(42);
    let target = generate_target(&mut rng, ALPHABET_SIZE).unwrap();
    let mut values: Vec<u8> = target.digits().iter().map(|d| d.value()).collect();
    values.sort_unstable();
    assert_eq!(values, (0..10).collect::<Vec<u8>>());
}

#[test]
fn test_empty_target() {
    let mut rng = StdRng::seed_from_u64(1);
    let target = generate_target(&mut rng, 0).unwrap();
    assert!(target.is_empty());
}

#[test]
fn test_length_beyond_alphabet_fails() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        generate_target(&mut rng, 11),
        Err(GameError::InvalidConfiguration { .. })
    ));
    assert!(generate_target(&mut rng, 100).is_err());
}

#[test]
fn test_same_seed_same_target() {
    let a = generate_target(&mut StdRng::seed_from_u64(99), 4).unwrap();
    let b = generate_target(&mut StdRng::seed_from_u64(99), 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_targets_vary_across_draws() {
    let mut rng = StdRng::seed_from_u64(2024);
    let targets: HashSet<String> = (0..50)
        .map(|_| generate_target(&mut rng, 4).unwrap().to_string())
        .collect();
    assert!(targets.len() > 1);
}

#[test]
fn test_every_digit_can_lead() {
    let mut rng = StdRng::seed_from_u64(3);
    let leaders: HashSet<Digit> = (0..500)
        .map(|_| generate_target(&mut rng, 4).unwrap().digits()[0])
        .collect();
    assert_eq!(leaders.len(), ALPHABET_SIZE);
}

#[test]
fn test_known_target() {
    let target = Target::new(parse_digits("1234").unwrap()).unwrap();
    assert_eq!(target.to_string(), "1 2 3 4");
    assert!(Target::new(parse_digits("1213").unwrap()).is_err());
}

proptest! {
    #[test]
    fn test_generated_target_is_distinct(len in 0usize..=10, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = generate_target(&mut rng, len).unwrap();
        prop_assert_eq!(target.len(), len);
        let unique: HashSet<Digit> = target.digits().iter().copied().collect();
        prop_assert_eq!(unique.len(), len);
        prop_assert!(target.digits().iter().all(|d| usize::from(d.value()) < ALPHABET_SIZE));
    }

    #[test]
    fn test_oversized_target_fails(len in 11usize..1000, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let is_config_error = matches!(
            generate_target(&mut rng, len),
            Err(GameError::InvalidConfiguration { .. })
        );
        prop_assert!(is_config_error);
    }
}
