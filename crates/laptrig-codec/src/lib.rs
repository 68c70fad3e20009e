//! Wire codec for the lap-trigger device protocol.
//!
//! Frames are UTF-8 text with `;`-separated positional fields. The first
//! field of an inbound frame is a status tag: `EVT` announces an unsolicited
//! event, `ACK` a positive reply to the pending command, and anything else is
//! a failure. Reply payloads carry no verb of their own — they are decoded
//! against the schema of whichever command is awaiting its answer.
//!
//! This crate is pure translation. No I/O, no session state.

pub mod codec;
pub mod error;
pub mod event;
mod field;
pub mod reply;
pub mod verb;

pub use codec::{
    decode_frame, encode_command, Inbound, FIELD_SEPARATOR, TAG_ACK, TAG_EVENT, TAG_NACK,
};
pub use error::{CodecError, Result};
pub use event::Event;
pub use reply::Reply;
pub use verb::Verb;
