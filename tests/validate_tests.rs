use number_guesser::validate::Rule;
use number_guesser::{validate_guess, GameError, Guess, GuessValidation};

#[test]
fn test_valid_guess() {
    let report = validate_guess("1234", 4);
    assert_eq!(report, GuessValidation::default());
    assert!(report.is_submittable());
    assert!(report.violations().is_empty());
}

#[test]
fn test_unknown_digit() {
    let report = validate_guess("12a4", 4);
    assert_eq!(
        report,
        GuessValidation {
            incorrect_length: false,
            unknown_digit: true,
            duplicate_digit: false,
        }
    );
    assert!(!report.is_submittable());
    assert_eq!(report.violations(), vec![Rule::KnownDigits]);
}

#[test]
fn test_duplicate_digit() {
    let report = validate_guess("1123", 4);
    assert_eq!(
        report,
        GuessValidation {
            incorrect_length: false,
            unknown_digit: false,
            duplicate_digit: true,
        }
    );
    assert_eq!(report.violations(), vec![Rule::UniqueDigits]);
}

#[test]
fn test_incorrect_length() {
    assert!(validate_guess("123", 4).incorrect_length);
    assert!(validate_guess("12345", 4).incorrect_length);
    assert!(validate_guess("", 4).incorrect_length);
    assert!(!validate_guess("", 0).incorrect_length);
}

#[test]
fn test_all_flags_together() {
    let report = validate_guess("aab", 4);
    assert!(report.incorrect_length);
    assert!(report.unknown_digit);
    assert!(report.duplicate_digit);
    assert_eq!(report.violations(), Rule::ALL.to_vec());
}

#[test]
fn test_flags_found_after_early_stop() {
    // Both per-character flags are set by "xx"; the length flag is computed regardless.
    let report = validate_guess("xx1234", 6);
    assert!(!report.incorrect_length);
    assert!(report.unknown_digit);
    assert!(report.duplicate_digit);
}

#[test]
fn test_length_counts_characters() {
    let report = validate_guess("12é4", 4);
    assert!(!report.incorrect_length);
    assert!(report.unknown_digit);
}

#[test]
fn test_non_ascii_digits_are_unknown() {
    assert!(validate_guess("١٢٣٤", 4).unknown_digit);
}

#[test]
fn test_display() {
    assert_eq!(validate_guess("1234", 4).to_string(), "ok");
    assert_eq!(
        validate_guess("1a1", 4).to_string(),
        "incorrect length, unknown digit, duplicate digit"
    );
}

#[test]
fn test_rule_wording() {
    assert_eq!(Rule::ExactLength.describe(4), "The length must be exactly 4");
    assert_eq!(Rule::KnownDigits.describe(4), "Only digits from 0 to 9");
}

#[test]
fn test_parse_valid_guess() {
    let guess = Guess::parse(" 9012\n", 4).unwrap();
    let values: Vec<u8> = guess.digits().iter().map(|d| d.value()).collect();
    assert_eq!(values, vec![9, 0, 1, 2]);
    assert_eq!(guess.to_string(), "9 0 1 2");
}

#[test]
fn test_parse_rejects_invalid_guess() {
    match Guess::parse("1123", 4) {
        Err(GameError::InvalidGuess(report)) => assert!(report.duplicate_digit),
        other => panic!("expected InvalidGuess, got {:?}", other),
    }
    assert!(Guess::parse("12a4", 4).is_err());
    assert!(Guess::parse("123", 4).is_err());
}
