//! Application layer use cases for the server.
//!
//! Use cases in this layer orchestrate the domain logic in `passgen-core` to
//! fulfil one client's goal, and stay free of concrete I/O: the session works
//! against any async byte stream, so the same code runs over a real TCP
//! connection in production and over an in-memory duplex pipe in tests.
//!
//! - **`session`** – Drives one connection from menu delivery through the
//!   request/response loop until the quit sentinel arrives or the transport
//!   faults.  This is the server's entire behaviour per client.

pub mod session;
