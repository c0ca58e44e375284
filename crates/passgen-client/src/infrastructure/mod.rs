//! Infrastructure layer for the client.
//!
//! - **`network`** – TCP connection to the server: connect, receive the menu
//!   record, and exchange request/response record pairs.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `passgen_core`, but MUST NOT be imported by the `application` layer.

pub mod network;
