//! Infrastructure layer for the server.
//!
//! Contains the OS-facing adapters: the TCP listener and the configuration
//! file storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `passgen_core`, but MUST NOT be imported by the `application` layer.

pub mod network;
pub mod storage;
