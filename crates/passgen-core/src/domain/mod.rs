//! Domain logic for PassGen.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies: no sockets, no file system, no console.  Everything here can
//! be unit-tested in isolation, and the randomness source is injected by the
//! caller so tests stay deterministic.
//!
//! - **`generator`** – Maps a password class and a validated length to a
//!   generated string of independent uniform draws.
//!
//! - **`validate`** – Classifies raw request selectors into a closed tagged
//!   variant and checks requests against the configured length bounds,
//!   producing either a validated request or a structured rejection.

pub mod generator;
pub mod validate;
