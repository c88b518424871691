// src/validator.rs
use crate::models::{CharacterClass, Requirements, Strength, StrengthReport};

/// Recommended minimum password length.
pub const MIN_RECOMMENDED_LENGTH: usize = 12;

// Ordered strength ladder: lower bit-score bound, label, display color.
// Evaluated by boundary lookup, so every score lands in exactly one band.
const STRENGTH_BANDS: &[(f64, Strength, &str)] = &[
    (0.0, Strength::VeryWeak, "#dc3545"),
    (40.0, Strength::Weak, "#ffc107"),
    (60.0, Strength::Moderate, "#28a745"),
    (80.0, Strength::Strong, "#0b69ff"),
    (128.0, Strength::VeryStrong, "#6f42c1"),
];

/// Estimate the strength of a password.
///
/// The score is the classic Shannon estimate for a uniformly random string
/// over an alphabet of size N: `H = L * log2(N)`, with N summed over the
/// character classes present. This assumes uniform independent character
/// selection, which holds for generator output but not necessarily for
/// arbitrary passwords, so treat the score as an upper bound.
pub fn validate(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let mut requirements = Requirements {
        min_length_ok: length >= MIN_RECOMMENDED_LENGTH,
        ..Default::default()
    };

    // Keyspace N: each class present adds its cardinality. Characters
    // outside all four tables count toward length but not toward N.
    let mut keyspace: u32 = 0;
    for class in CharacterClass::ALL {
        if password.chars().any(|c| class.contains(c)) {
            keyspace += class.cardinality();
            match class {
                CharacterClass::Lower => requirements.has_lower = true,
                CharacterClass::Upper => requirements.has_upper = true,
                CharacterClass::Digit => requirements.has_digit = true,
                CharacterClass::Symbol => requirements.has_symbol = true,
            }
        }
    }

    let score_bits = if keyspace > 0 {
        let h = length as f64 * f64::from(keyspace).log2();
        (h * 100.0).round() / 100.0
    } else {
        0.0
    };

    let (strength, color) = classify(score_bits);

    StrengthReport {
        score_bits,
        length,
        keyspace_size: keyspace,
        requirements,
        strength,
        recommendation: recommendation(strength, score_bits),
        color: color.to_string(),
    }
}

/// Map a bit score to its band in the strength ladder.
pub fn classify(score_bits: f64) -> (Strength, &'static str) {
    let mut current = (STRENGTH_BANDS[0].1, STRENGTH_BANDS[0].2);
    for &(floor, strength, color) in STRENGTH_BANDS {
        if score_bits >= floor {
            current = (strength, color);
        }
    }
    current
}

fn recommendation(strength: Strength, score_bits: f64) -> String {
    match strength {
        Strength::VeryWeak => format!(
            "Only {:.1} bits of entropy. Use at least 12 characters and mix in more character types.",
            score_bits
        ),
        Strength::Weak => format!(
            "At {:.1} bits this is weak. Increase the length to 14+ or add more character variety.",
            score_bits
        ),
        Strength::Moderate => format!(
            "A score of {:.1} bits is decent. Consider 16+ characters to reach Strong.",
            score_bits
        ),
        Strength::Strong => format!(
            "Good: {:.1} bits makes a robust password.",
            score_bits
        ),
        Strength::VeryStrong => format!(
            "Excellent: {:.1} bits is beyond practical brute force.",
            score_bits
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        let report = validate("");
        assert_eq!(report.score_bits, 0.0);
        assert_eq!(report.length, 0);
        assert_eq!(report.keyspace_size, 0);
        assert_eq!(report.requirements, Requirements::default());
        assert_eq!(report.strength, Strength::VeryWeak);
    }

    #[test]
    fn lowercase_only_keyspace() {
        let report = validate("aaaaaaaaaaaa");
        assert_eq!(report.length, 12);
        assert_eq!(report.keyspace_size, 26);
        assert!(report.requirements.min_length_ok);
        assert!(report.requirements.has_lower);
        assert!(!report.requirements.has_upper);
        assert!(!report.requirements.has_digit);
        assert!(!report.requirements.has_symbol);
        // 12 * log2(26), rounded to 2 decimals
        assert_eq!(report.score_bits, 56.41);
    }

    #[test]
    fn all_four_classes_keyspace() {
        let report = validate("Ab3!Ab3!Ab3!");
        assert_eq!(report.length, 12);
        assert_eq!(report.keyspace_size, 94);
        assert!(report.requirements.min_length_ok);
        assert!(report.requirements.has_lower);
        assert!(report.requirements.has_upper);
        assert!(report.requirements.has_digit);
        assert!(report.requirements.has_symbol);
        // 12 * log2(94), rounded to 2 decimals
        assert_eq!(report.score_bits, 78.66);
    }

    #[test]
    fn validation_is_deterministic() {
        let a = validate("Tr0ub4dor&3");
        let b = validate("Tr0ub4dor&3");
        assert_eq!(a.score_bits, b.score_bits);
        assert_eq!(a.strength, b.strength);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn characters_outside_all_classes_add_length_but_no_keyspace() {
        let report = validate("contraseña");
        assert_eq!(report.length, 10);
        // 'ñ' is counted in L but contributes nothing to N
        assert_eq!(report.keyspace_size, 26);
    }

    #[test]
    fn ladder_band_boundaries() {
        assert_eq!(classify(0.0).0, Strength::VeryWeak);
        assert_eq!(classify(39.99).0, Strength::VeryWeak);
        assert_eq!(classify(40.0).0, Strength::Weak);
        assert_eq!(classify(60.0).0, Strength::Moderate);
        assert_eq!(classify(80.0).0, Strength::Strong);
        assert_eq!(classify(127.99).0, Strength::Strong);
        assert_eq!(classify(128.0).0, Strength::VeryStrong);
        assert_eq!(classify(500.0).0, Strength::VeryStrong);
    }

    #[test]
    fn strength_is_monotone_in_score() {
        let mut previous = Strength::VeryWeak;
        for step in 0..2000 {
            let (strength, _) = classify(step as f64 * 0.1);
            assert!(strength >= previous);
            previous = strength;
        }
    }
}
