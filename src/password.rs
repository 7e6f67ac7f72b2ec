use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::{ debug, info };

use crate::errors::{ GenerationError, ValidationError };
use crate::generators::{ pick_char, ClassSet };

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 16;

/// Reads a number the way a form field coerces text: all whitespace is dropped,
/// `0x`/`0o`/`0b` prefixes are honoured, `Infinity` is spelled out.
fn parse_number(input: &str) -> Option<f64> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let radix = match compact.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &compact[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        });
    }

    match compact.as_str() {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan", which are not numbers here
    if !compact.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return None;
    }

    compact.parse().ok()
}

/// Checks a raw length input and returns it as a password length.
///
/// Checks run in a fixed order and the first failure wins:
/// presence, number, sign, integrality, range.
pub fn validate_length(input: &str) -> Result<usize, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Missing);
    }

    let value = parse_number(input).ok_or(ValidationError::NotANumber)?;

    if value <= 0.0 {
        return Err(ValidationError::NotPositive);
    }

    // inf.fract() is NaN, so infinity lands here too
    if value.fract() != 0.0 {
        return Err(ValidationError::NotInteger);
    }

    if value < MIN_LENGTH as f64 || value > MAX_LENGTH as f64 {
        return Err(ValidationError::OutOfRange(value));
    }

    Ok(value as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn from_input(length_input: &str, classes: ClassSet) -> Result<Self, ValidationError> {
        let length = validate_length(length_input).inspect_err(|e| {
            debug!(input = length_input, error = %e, "length rejected");
        })?;

        Ok(Self { length, classes })
    }

    pub fn generate(&self) -> Result<GeneratedPassword, GenerationError> {
        generate(self.length, self.classes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    password: String,
    length: usize,
    alphabet_size: usize,
}

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.password
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.password)
    }
}

pub fn generate(length: usize, classes: ClassSet) -> Result<GeneratedPassword, GenerationError> {
    let mut rng = rand::rng();
    generate_with(&mut rng, length, classes)
}

/// Draws `length` characters uniformly, with replacement, from the alphabet of `classes`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: ClassSet,
) -> Result<GeneratedPassword, GenerationError> {
    let alphabet = classes.alphabet();
    if alphabet.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let password: String = (0..length).map(|_| pick_char(rng, &alphabet)).collect();

    info!(length, alphabet_size = alphabet.len(), "password generated");

    Ok(GeneratedPassword {
        password,
        length,
        alphabet_size: alphabet.len(),
    })
}
