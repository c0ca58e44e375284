//! Password generation: independent uniform draws from a per-class alphabet.
//!
//! Each output position is drawn independently; there are no exclusion rules
//! and no "at least one digit" style guarantees.  The caller is responsible
//! for validating the requested length before calling [`generate`].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The fixed alphabet used by [`PasswordClass::Secure`]: lowercase, uppercase,
/// digits, and the symbols `!@#$%^&*()`.
pub const SECURE_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// The four password generation classes a client can request.
///
/// This enum is closed: every validated request carries exactly one of these
/// variants, so generation code can match exhaustively with no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordClass {
    /// Digits `0-9` only.
    Numeric,
    /// Lowercase letters `a-z` only.
    Alpha,
    /// Each position is a 50/50 choice between a lowercase letter and a digit.
    Mixed,
    /// Uniform draws from the 72-character [`SECURE_CHARSET`].
    Secure,
}

/// Generates a password of exactly `length` characters for `class`.
///
/// `length` must already have been validated by the caller (see
/// [`crate::domain::validate::validate`]); this function has no error path.
///
/// # Examples
///
/// ```rust
/// use passgen_core::{generate, PasswordClass};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let password = generate(PasswordClass::Numeric, 8, &mut rng);
/// assert_eq!(password.len(), 8);
/// assert!(password.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate(class: PasswordClass, length: usize, rng: &mut impl Rng) -> String {
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        password.push(draw(class, rng));
    }
    password
}

/// Draws one character for `class`.
fn draw(class: PasswordClass, rng: &mut impl Rng) -> char {
    match class {
        PasswordClass::Numeric => digit(rng),
        PasswordClass::Alpha => lowercase(rng),
        // Two-stage draw: first the coin flip between letter and digit, then
        // a uniform draw within the chosen set.  This is not uniform over the
        // 36-character union.
        PasswordClass::Mixed => {
            if rng.gen_bool(0.5) {
                lowercase(rng)
            } else {
                digit(rng)
            }
        }
        PasswordClass::Secure => SECURE_CHARSET[rng.gen_range(0..SECURE_CHARSET.len())] as char,
    }
}

fn digit(rng: &mut impl Rng) -> char {
    (b'0' + rng.gen_range(0..10u8)) as char
}

fn lowercase(rng: &mut impl Rng) -> char {
    (b'a' + rng.gen_range(0..26u8)) as char
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const ALL_CLASSES: [PasswordClass; 4] = [
        PasswordClass::Numeric,
        PasswordClass::Alpha,
        PasswordClass::Mixed,
        PasswordClass::Secure,
    ];

    fn in_alphabet(class: PasswordClass, c: char) -> bool {
        match class {
            PasswordClass::Numeric => c.is_ascii_digit(),
            PasswordClass::Alpha => c.is_ascii_lowercase(),
            PasswordClass::Mixed => c.is_ascii_lowercase() || c.is_ascii_digit(),
            PasswordClass::Secure => SECURE_CHARSET.contains(&(c as u8)),
        }
    }

    #[test]
    fn test_generate_produces_exact_length_for_every_class_and_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for class in ALL_CLASSES {
            for length in 6..=32 {
                let password = generate(class, length, &mut rng);
                assert_eq!(
                    password.len(),
                    length,
                    "{class:?} password must be exactly {length} characters"
                );
            }
        }
    }

    #[test]
    fn test_generate_draws_only_from_the_class_alphabet() {
        let mut rng = StdRng::seed_from_u64(2);
        for class in ALL_CLASSES {
            // A long sample makes an out-of-alphabet draw very unlikely to hide.
            let password = generate(class, 32, &mut rng);
            for c in password.chars() {
                assert!(
                    in_alphabet(class, c),
                    "{c:?} is outside the {class:?} alphabet"
                );
            }
        }
    }

    #[test]
    fn test_secure_charset_has_72_entries() {
        assert_eq!(SECURE_CHARSET.len(), 72);
    }

    #[test]
    fn test_generate_is_deterministic_for_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            generate(PasswordClass::Secure, 32, &mut a),
            generate(PasswordClass::Secure, 32, &mut b)
        );
    }

    #[test]
    fn test_generate_differs_across_seeds() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(
            generate(PasswordClass::Secure, 32, &mut a),
            generate(PasswordClass::Secure, 32, &mut b)
        );
    }

    #[test]
    fn test_mixed_eventually_produces_both_letters_and_digits() {
        let mut rng = StdRng::seed_from_u64(3);
        let sample = generate(PasswordClass::Mixed, 32, &mut rng);
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }
}
