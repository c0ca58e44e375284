//! Fixed-size binary codec for the password-generation protocol records.
//!
//! Wire format, per record (all sizes in bytes):
//! ```text
//! Menu:     [text:1024]                                        = 1024
//! Request:  [selector:1][length_text:1024]                     = 1025
//! Response: [keep_going:1][password:33][request_error:1][error_text:50] = 85
//! ```
//! Text fields are NUL-terminated UTF-8, zero-padded to their capacity; flag
//! bytes encode as `0x01`/`0x00` and decode any non-zero byte as true.
//!
//! The codec only moves bytes: it validates the record size and the UTF-8
//! well-formedness of text fields, never their meaning.  Semantic checks live
//! in [`crate::domain::validate`].  Partial transfers are the transport
//! layer's problem; decode expects exactly one full record.

use thiserror::Error;

use crate::protocol::messages::{
    MenuRecord, RequestRecord, ResponseRecord, LENGTH_TEXT_CAPACITY, MENU_RECORD_SIZE,
    MENU_TEXT_CAPACITY, PASSWORD_TEXT_CAPACITY, REQUEST_RECORD_SIZE, RESPONSE_RECORD_SIZE,
};

/// Errors that can occur during record encoding or decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The byte slice is not exactly one record long.
    #[error("record size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A text value does not fit its fixed field (capacity includes the NUL).
    #[error("{field} is {len} bytes, exceeding its {capacity}-byte field")]
    Oversize {
        field: &'static str,
        len: usize,
        capacity: usize,
    },

    /// A text field's content is not valid UTF-8.
    #[error("{field} is not valid UTF-8")]
    Utf8 { field: &'static str },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a [`MenuRecord`] into exactly [`MENU_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError::Oversize`] if the menu text does not fit its field.
pub fn encode_menu(menu: &MenuRecord) -> Result<Vec<u8>, RecordError> {
    let mut buf = vec![0u8; MENU_RECORD_SIZE];
    write_text(&mut buf[..MENU_TEXT_CAPACITY], &menu.text, "menu text")?;
    Ok(buf)
}

/// Decodes a [`MenuRecord`] from exactly [`MENU_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError`] if the slice length or text content is malformed.
pub fn decode_menu(bytes: &[u8]) -> Result<MenuRecord, RecordError> {
    expect_size(bytes, MENU_RECORD_SIZE)?;
    Ok(MenuRecord {
        text: read_text(&bytes[..MENU_TEXT_CAPACITY], "menu text")?,
    })
}

/// Encodes a [`RequestRecord`] into exactly [`REQUEST_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError::Oversize`] if the length text does not fit its field.
///
/// # Examples
///
/// ```rust
/// use passgen_core::{decode_request, encode_request, RequestRecord};
///
/// let request = RequestRecord::new(b'n', "8");
/// let bytes = encode_request(&request).unwrap();
/// assert_eq!(decode_request(&bytes).unwrap(), request);
/// ```
pub fn encode_request(request: &RequestRecord) -> Result<Vec<u8>, RecordError> {
    let mut buf = vec![0u8; REQUEST_RECORD_SIZE];
    buf[0] = request.selector;
    write_text(
        &mut buf[1..1 + LENGTH_TEXT_CAPACITY],
        &request.length_text,
        "length text",
    )?;
    Ok(buf)
}

/// Decodes a [`RequestRecord`] from exactly [`REQUEST_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError`] if the slice length or text content is malformed.
pub fn decode_request(bytes: &[u8]) -> Result<RequestRecord, RecordError> {
    expect_size(bytes, REQUEST_RECORD_SIZE)?;
    Ok(RequestRecord {
        selector: bytes[0],
        length_text: read_text(&bytes[1..1 + LENGTH_TEXT_CAPACITY], "length text")?,
    })
}

/// Encodes a [`ResponseRecord`] into exactly [`RESPONSE_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError::Oversize`] if the password or error text does not
/// fit its field.
pub fn encode_response(response: &ResponseRecord) -> Result<Vec<u8>, RecordError> {
    let mut buf = vec![0u8; RESPONSE_RECORD_SIZE];
    buf[0] = flag(response.keep_going);
    write_text(
        &mut buf[1..1 + PASSWORD_TEXT_CAPACITY],
        &response.password,
        "password",
    )?;
    buf[1 + PASSWORD_TEXT_CAPACITY] = flag(response.request_error);
    write_text(
        &mut buf[2 + PASSWORD_TEXT_CAPACITY..],
        &response.error_text,
        "error text",
    )?;
    Ok(buf)
}

/// Decodes a [`ResponseRecord`] from exactly [`RESPONSE_RECORD_SIZE`] bytes.
///
/// # Errors
///
/// Returns [`RecordError`] if the slice length or text content is malformed.
pub fn decode_response(bytes: &[u8]) -> Result<ResponseRecord, RecordError> {
    expect_size(bytes, RESPONSE_RECORD_SIZE)?;
    Ok(ResponseRecord {
        keep_going: bytes[0] != 0,
        password: read_text(&bytes[1..1 + PASSWORD_TEXT_CAPACITY], "password")?,
        request_error: bytes[1 + PASSWORD_TEXT_CAPACITY] != 0,
        error_text: read_text(&bytes[2 + PASSWORD_TEXT_CAPACITY..], "error text")?,
    })
}

// ── Field helpers ─────────────────────────────────────────────────────────────

fn expect_size(bytes: &[u8], expected: usize) -> Result<(), RecordError> {
    if bytes.len() != expected {
        return Err(RecordError::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn flag(value: bool) -> u8 {
    if value {
        0x01
    } else {
        0x00
    }
}

/// Writes `text` into a zeroed field, leaving at least one NUL terminator.
///
/// Over-long text is an error rather than a silent truncation: with no length
/// prefix on the wire, a truncated value would decode as a different message.
fn write_text(field: &mut [u8], text: &str, name: &'static str) -> Result<(), RecordError> {
    let bytes = text.as_bytes();
    if bytes.len() >= field.len() {
        return Err(RecordError::Oversize {
            field: name,
            len: bytes.len(),
            capacity: field.len(),
        });
    }
    field[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}

/// Reads a NUL-terminated string from a fixed field; bytes after the first
/// NUL are padding and ignored.
fn read_text(field: &[u8], name: &'static str) -> Result<String, RecordError> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end])
        .map(str::to_owned)
        .map_err(|_| RecordError::Utf8 { field: name })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
