//! Client driver for the lap-trigger device protocol.
//!
//! laptrig talks the device's `;`-separated text protocol over a single
//! WebSocket: strict one-command-in-flight correlation, typed replies, and
//! unsolicited event routing.
//!
//! # Crate Structure
//!
//! - [`transport`] — endpoint configuration and the WebSocket transport
//! - [`codec`] — pure wire translation between frames and typed values
//! - [`client`] — the session: command queue, pending slot, event observer
//!   (behind the `client` feature, on by default)

/// Re-export transport types.
pub mod transport {
    pub use laptrig_transport::*;
}

/// Re-export codec types.
pub mod codec {
    pub use laptrig_codec::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use laptrig_client::*;
}
