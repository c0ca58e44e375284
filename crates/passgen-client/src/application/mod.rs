//! Application layer use cases for the client.
//!
//! - **`prompt`** – Parses one line of local user input into either a request
//!   to send or a local re-prompt.  Pure logic: malformed input never
//!   contacts the peer, and a missing length gets the default substituted
//!   before anything touches the network.

pub mod prompt;
