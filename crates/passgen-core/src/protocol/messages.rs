//! Wire record types for the password-generation protocol.
//!
//! Every message is a fixed-size record: no delimiters, no length prefix.
//! Both peers agree on the field widths below and transfer exactly one
//! record's worth of bytes per read or write.  A session exchanges them in a
//! fixed sequence: one Menu (server to client), then Request/Response pairs
//! until a Response with `keep_going = false`.

use serde::{Deserialize, Serialize};

use crate::domain::validate::PasswordPolicy;

// ── Field capacities ──────────────────────────────────────────────────────────

/// Capacity of the menu text field, including its NUL terminator.
pub const MENU_TEXT_CAPACITY: usize = 1024;

/// Capacity of the request length field, including its NUL terminator.
pub const LENGTH_TEXT_CAPACITY: usize = 1024;

/// Capacity of the password field: 32 characters plus the NUL terminator.
pub const PASSWORD_TEXT_CAPACITY: usize = 33;

/// Capacity of the response error-message field, including its NUL terminator.
pub const ERROR_TEXT_CAPACITY: usize = 50;

// ── Record sizes ──────────────────────────────────────────────────────────────

/// Total size of an encoded Menu record.
pub const MENU_RECORD_SIZE: usize = MENU_TEXT_CAPACITY;

/// Total size of an encoded Request record: selector byte + length text.
pub const REQUEST_RECORD_SIZE: usize = 1 + LENGTH_TEXT_CAPACITY;

/// Total size of an encoded Response record:
/// keep-going flag + password + error flag + error text.
pub const RESPONSE_RECORD_SIZE: usize =
    1 + PASSWORD_TEXT_CAPACITY + 1 + ERROR_TEXT_CAPACITY;

// ── Records ───────────────────────────────────────────────────────────────────

/// Menu record, sent by the server exactly once per accepted connection.
///
/// The text lists the five selectors and the accepted length range; it is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Menu text shown to the client, at most [`MENU_TEXT_CAPACITY`]` - 1` bytes.
    pub text: String,
}

impl MenuRecord {
    /// Builds the menu describing the selectors and the policy's length range.
    pub fn describing(policy: &PasswordPolicy) -> Self {
        let text = format!(
            "Insert the type of password and its length (between {} and {}):\n\
             \x20 n: numeric password (only digits)\n\
             \x20 a: alphabetic password (only lowercase letters)\n\
             \x20 m: mixed password (lowercase letters and digits)\n\
             \x20 s: secure password (uppercase letters, lowercase letters, digits, and symbols)\n\
             \x20 q: to close the connection\n\
             ? ",
            policy.min_length, policy.max_length
        );
        Self { text }
    }
}

/// Request record, sent by the client once per loop iteration.
///
/// The selector travels as its raw byte; it is classified exactly once by the
/// receiving session (see [`crate::domain::validate::Selector`]).  The length
/// travels as text and is not yet validated as numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Raw selector byte (`n`/`a`/`m`/`s`/`q`, case-insensitive, or anything
    /// else the client typed).
    pub selector: u8,
    /// Requested length as typed, at most [`LENGTH_TEXT_CAPACITY`]` - 1` bytes.
    pub length_text: String,
}

impl RequestRecord {
    /// Convenience constructor.
    pub fn new(selector: u8, length_text: impl Into<String>) -> Self {
        Self {
            selector,
            length_text: length_text.into(),
        }
    }
}

/// Response record, sent by the server once per request.
///
/// Shape invariant: when `keep_going` is true exactly one of
/// `password`/`error_text` is non-empty; when `keep_going` is false both are
/// empty.  The constructors below are the only ways the server builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Whether the session continues after this response.  Set to false only
    /// for the quit sentinel, never for an error.
    pub keep_going: bool,
    /// The generated password, or empty on error and on close.
    pub password: String,
    /// Whether the request was rejected.
    pub request_error: bool,
    /// The rejection message, or empty on success and on close.
    pub error_text: String,
}

impl ResponseRecord {
    /// A successful generation: the session continues and `password` is set.
    pub fn granting(password: String) -> Self {
        Self {
            keep_going: true,
            password,
            request_error: false,
            error_text: String::new(),
        }
    }

    /// A protocol-level rejection: the session continues so the client can
    /// retry, and `error_text` carries the fixed rejection message.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            keep_going: true,
            password: String::new(),
            request_error: true,
            error_text: message.into(),
        }
    }

    /// The closing response to the quit sentinel: no password, no error.
    pub fn closing() -> Self {
        Self {
            keep_going: false,
            password: String::new(),
            request_error: false,
            error_text: String::new(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
