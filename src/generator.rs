// src/generator.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::charset;
use crate::models::GenerationOptions;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be at least 1")]
    InvalidLength,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a random password from the enabled character classes.
///
/// Every enabled class is guaranteed at least one character in the output.
/// When `length` is smaller than the number of enabled classes, the result
/// is one character per enabled class and therefore longer than requested;
/// callers that need an exact length should not enable more classes than
/// the length allows. With no classes enabled the password is drawn from
/// letters and digits instead of failing.
///
/// All draws and the final shuffle come from the operating system's secure
/// random source.
pub fn generate(options: &GenerationOptions) -> Result<String> {
    if options.length == 0 {
        return Err(GeneratorError::InvalidLength);
    }

    let mut rng = OsRng;
    let mut pool: Vec<u8> = Vec::new();
    let mut password: Vec<u8> = Vec::new();

    // One guaranteed representative per enabled class, and the class joins
    // the fill pool.
    for class in options.enabled_classes() {
        let chars = class.chars();
        pool.extend_from_slice(chars);
        password.push(*chars.choose(&mut rng).unwrap());
    }

    // Nothing selected: fall back to letters + digits so the pool is never
    // empty.
    if pool.is_empty() {
        log::debug!("no character class enabled, falling back to letters + digits");
        pool.extend_from_slice(charset::LOWER);
        pool.extend_from_slice(charset::UPPER);
        pool.extend_from_slice(charset::DIGITS);
        password.push(*pool.choose(&mut rng).unwrap());
    }

    // Fill the rest from the combined pool.
    let remaining = options.length.saturating_sub(password.len());
    for _ in 0..remaining {
        password.push(*pool.choose(&mut rng).unwrap());
    }

    // Shuffle so the guaranteed class characters are not stuck at the front.
    password.shuffle(&mut rng);

    Ok(password.into_iter().map(char::from).collect())
}
