//! Short code generation.
//!
//! Codes are drawn uniformly at random from a fixed 6-character,
//! 62-symbol alphabet, giving 62^6 ≈ 56.8 billion possible codes.

use rand::{Rng, distr::Alphanumeric};

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Each character is sampled uniformly from `[A-Za-z0-9]`. Uniqueness is
/// not guaranteed here; the registry checks the candidate against
/// existing keys and redraws on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
