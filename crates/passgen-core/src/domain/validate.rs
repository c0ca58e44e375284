//! Request validation: selector classification and length-bound checks.
//!
//! The selector byte is decoded exactly once, at the protocol boundary, into
//! the closed [`Selector`] variant; downstream code never re-parses the raw
//! character.  Validation is a pure function of its inputs and checks the
//! class before the length: a request with both faults always reports the
//! type error.

use serde::{Deserialize, Serialize};

use crate::domain::generator::PasswordClass;

/// Length bounds enforced by the server, passed into the validator and the
/// session at construction rather than baked in as compile-time constants.
///
/// `max_length` must not exceed the wire password capacity
/// ([`crate::protocol::messages::PASSWORD_TEXT_CAPACITY`] minus the NUL
/// terminator, i.e. 32); a larger value would make generated passwords
/// unencodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum accepted password length.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Maximum accepted password length.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    6
}

fn default_max_length() -> usize {
    32
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

/// A request selector decoded from its raw byte.
///
/// Grammar (case-insensitive): `n` numeric, `a` alphabetic, `m` mixed,
/// `s` secure, `q` quit.  Unknown bytes do not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// One of the four generation classes.
    Class(PasswordClass),
    /// The sentinel that ends the session without generating a password.
    Quit,
}

impl Selector {
    /// Classifies a raw selector byte, case-insensitively.
    pub fn classify(byte: u8) -> Option<Self> {
        match byte.to_ascii_lowercase() {
            b'n' => Some(Self::Class(PasswordClass::Numeric)),
            b'a' => Some(Self::Class(PasswordClass::Alpha)),
            b'm' => Some(Self::Class(PasswordClass::Mixed)),
            b's' => Some(Self::Class(PasswordClass::Secure)),
            b'q' => Some(Self::Quit),
            _ => None,
        }
    }

    /// Returns `true` if `byte` is the quit sentinel (`q`/`Q`).
    pub fn is_quit(byte: u8) -> bool {
        matches!(Self::classify(byte), Some(Self::Quit))
    }
}

/// A request that passed validation.  Exists only for the duration of one
/// session iteration; it is never transmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// The requested generation class.
    pub class: PasswordClass,
    /// The requested length, within the policy bounds.
    pub length: usize,
}

/// Why a request was rejected.  Surfaced to the peer as an in-band error
/// response; the session keeps running so the client can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The selector is not one of the four generation classes.
    InvalidType,
    /// The length text is empty, non-numeric, or outside the policy bounds.
    InvalidLength,
}

impl Rejection {
    /// The fixed wire message for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidType => "The type inserted is not valid.\n",
            Self::InvalidLength => "The length for the password is not valid.\n",
        }
    }
}

/// Validates a raw request against the policy.
///
/// Checks run in a fixed order: class first, then length; a class failure
/// short-circuits without looking at the length.  The quit sentinel is
/// handled by the session before validation ever runs; if it does arrive
/// here it is not a generation class and is rejected as such.
pub fn validate(
    selector: u8,
    length_text: &str,
    policy: &PasswordPolicy,
) -> Result<ValidatedRequest, Rejection> {
    let class = match Selector::classify(selector) {
        Some(Selector::Class(class)) => class,
        _ => return Err(Rejection::InvalidType),
    };

    let length = parse_length(length_text).ok_or(Rejection::InvalidLength)?;
    if length < policy.min_length || length > policy.max_length {
        return Err(Rejection::InvalidLength);
    }

    Ok(ValidatedRequest { class, length })
}

/// Parses a decimal-digit length string.  Empty or non-digit content fails,
/// as does a digit string too large to represent.
fn parse_length(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::default()
    }

    // ── Selector classification ──────────────────────────────────────────────

    #[test]
    fn test_classify_maps_each_selector_case_insensitively() {
        for (byte, expected) in [
            (b'n', Selector::Class(PasswordClass::Numeric)),
            (b'N', Selector::Class(PasswordClass::Numeric)),
            (b'a', Selector::Class(PasswordClass::Alpha)),
            (b'A', Selector::Class(PasswordClass::Alpha)),
            (b'm', Selector::Class(PasswordClass::Mixed)),
            (b'M', Selector::Class(PasswordClass::Mixed)),
            (b's', Selector::Class(PasswordClass::Secure)),
            (b'S', Selector::Class(PasswordClass::Secure)),
            (b'q', Selector::Quit),
            (b'Q', Selector::Quit),
        ] {
            assert_eq!(Selector::classify(byte), Some(expected));
        }
    }

    #[test]
    fn test_classify_rejects_unknown_bytes() {
        for byte in [b'x', b'z', b'0', b' ', 0u8, 0xFF] {
            assert_eq!(Selector::classify(byte), None);
        }
    }

    #[test]
    fn test_is_quit_only_matches_the_sentinel() {
        assert!(Selector::is_quit(b'q'));
        assert!(Selector::is_quit(b'Q'));
        assert!(!Selector::is_quit(b'n'));
        assert!(!Selector::is_quit(b'x'));
    }

    // ── Length validation ────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        for text in ["6", "32"] {
            let validated = validate(b'n', text, &policy()).expect("boundary must be accepted");
            assert_eq!(validated.class, PasswordClass::Numeric);
        }
    }

    #[test]
    fn test_validate_rejects_lengths_just_outside_the_bounds() {
        for text in ["5", "33"] {
            assert_eq!(
                validate(b'n', text, &policy()),
                Err(Rejection::InvalidLength)
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_and_non_numeric_lengths() {
        for text in ["", "abc", "1a", "-8", " 8", "8 "] {
            assert_eq!(
                validate(b's', text, &policy()),
                Err(Rejection::InvalidLength),
                "{text:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_overlong_digit_strings_as_invalid_length() {
        let text = "9".repeat(30);
        assert_eq!(
            validate(b'n', &text, &policy()),
            Err(Rejection::InvalidLength)
        );
    }

    // ── Ordering contract ────────────────────────────────────────────────────

    #[test]
    fn test_validate_reports_invalid_type_even_when_length_is_also_invalid() {
        assert_eq!(
            validate(b'x', "999", &policy()),
            Err(Rejection::InvalidType)
        );
        assert_eq!(validate(b'x', "abc", &policy()), Err(Rejection::InvalidType));
        assert_eq!(validate(b'x', "8", &policy()), Err(Rejection::InvalidType));
    }

    #[test]
    fn test_validate_respects_custom_policy_bounds() {
        let narrow = PasswordPolicy {
            min_length: 10,
            max_length: 12,
        };
        assert!(validate(b'a', "10", &narrow).is_ok());
        assert_eq!(validate(b'a', "9", &narrow), Err(Rejection::InvalidLength));
        assert_eq!(validate(b'a', "13", &narrow), Err(Rejection::InvalidLength));
    }

    #[test]
    fn test_rejection_messages_are_the_fixed_wire_strings() {
        assert_eq!(
            Rejection::InvalidType.message(),
            "The type inserted is not valid.\n"
        );
        assert_eq!(
            Rejection::InvalidLength.message(),
            "The length for the password is not valid.\n"
        );
    }

    #[test]
    fn test_password_policy_default_is_6_to_32() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length, 6);
        assert_eq!(policy.max_length, 32);
    }
}
