// src/lib.rs
pub mod charset;
pub mod cli;
pub mod generator;
pub mod models;
pub mod validator;

pub use generator::{generate, GeneratorError};
pub use models::{CharacterClass, GenerationOptions, Strength, StrengthReport};
pub use validator::validate;
