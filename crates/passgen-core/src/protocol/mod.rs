//! Protocol module containing the wire record types and the fixed-size codec.

pub mod codec;
pub mod messages;

pub use codec::{
    decode_menu, decode_request, decode_response, encode_menu, encode_request, encode_response,
    RecordError,
};
pub use messages::*;
