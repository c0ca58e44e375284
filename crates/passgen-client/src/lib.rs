//! passgen-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! The client drives the same session protocol as the server, from the
//! opposite role: it connects, receives the menu once, then loops sending
//! Request records built from local prompt input and interpreting the
//! Response records, until it sends the quit selector or the transport
//! faults.

pub mod application;
pub mod infrastructure;
