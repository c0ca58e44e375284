//! File-system storage for the server.
//!
//! - **`config`** – TOML configuration persistence in the platform config
//!   directory.

pub mod config;
