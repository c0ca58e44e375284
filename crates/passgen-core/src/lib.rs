//! # passgen-core
//!
//! Shared library for PassGen containing the wire protocol records, the
//! fixed-size binary codec, and the password domain logic (generation and
//! request validation).
//!
//! This crate is used by both the server and client applications.
//! It has zero dependencies on sockets, the file system, or the console.
//!
//! # Architecture overview
//!
//! PassGen is a small client-server system for on-demand password generation:
//! a client connects, receives a menu describing the available password
//! classes, and then repeatedly requests a password of a given class and
//! length until it sends the quit selector.
//!
//! This crate (`passgen-core`) is the shared foundation.  It defines:
//!
//! - **`protocol`** – How bytes travel over the network.  Every message is a
//!   fixed-size record with documented field widths; there are no delimiters
//!   and no length prefixes, so both peers read and write exactly the record
//!   size in one logical operation.
//!
//! - **`domain`** – Pure business logic with no I/O.  The password generator
//!   maps a class and length to a string of independent uniform draws, and
//!   the validator turns a raw request into a validated one or a structured
//!   rejection.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `passgen_core::PasswordClass` instead of the full module path.
pub use domain::generator::{generate, PasswordClass, SECURE_CHARSET};
pub use domain::validate::{validate, PasswordPolicy, Rejection, Selector, ValidatedRequest};
pub use protocol::codec::{
    decode_menu, decode_request, decode_response, encode_menu, encode_request, encode_response,
    RecordError,
};
pub use protocol::messages::{
    MenuRecord, RequestRecord, ResponseRecord, MENU_RECORD_SIZE, REQUEST_RECORD_SIZE,
    RESPONSE_RECORD_SIZE,
};
