// src/models.rs
use serde::{Deserialize, Serialize};

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    /// Enabled classes in the fixed lower, upper, digit, symbol order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_lowercase {
            classes.push(CharacterClass::Lower);
        }
        if self.include_uppercase {
            classes.push(CharacterClass::Upper);
        }
        if self.include_digits {
            classes.push(CharacterClass::Digit);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }
}

/// Per-password requirement checks reported by the validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub min_length_ok: bool,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

/// Qualitative strength label, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::VeryWeak => write!(f, "Very Weak"),
            Strength::Weak => write!(f, "Weak"),
            Strength::Moderate => write!(f, "Moderate"),
            Strength::Strong => write!(f, "Strong"),
            Strength::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Full result of a strength check. Flat record, serializable as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Shannon estimate `L * log2(N)`, rounded to 2 decimals.
    pub score_bits: f64,
    pub length: usize,
    /// Keyspace size N: summed cardinality of the classes present.
    pub keyspace_size: u32,
    pub requirements: Requirements,
    pub strength: Strength,
    pub recommendation: String,
    /// Display color as a hex code, for UIs that render the report.
    pub color: String,
}
