// src/charset.rs
use crate::models::CharacterClass;

// Fixed character class tables. These are the alphabets the generator draws
// from and the cardinalities the validator sums into the keyspace, so the
// two sides of the crate always agree on what counts as a "symbol".
pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

impl CharacterClass {
    /// The four classes in the fixed order the generator walks them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWER,
            CharacterClass::Upper => UPPER,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Number of distinct characters this class adds to the keyspace.
    pub fn cardinality(self) -> u32 {
        self.chars().len() as u32
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}
