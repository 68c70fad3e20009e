//! Text-frame transport for the lap-trigger device.
//!
//! The device speaks whole UTF-8 text frames over a single WebSocket, in
//! order, reliably once connected. This crate provides the [`Transport`]
//! trait capturing exactly that contract, the [`Endpoint`] configuration
//! that locates the device, and the `tokio-tungstenite` implementation
//! used by default.
//!
//! This is the lowest layer of laptrig. The session in `laptrig-client`
//! builds on top of it.

pub mod endpoint;
pub mod error;
pub mod traits;
pub mod ws;

pub use endpoint::Endpoint;
pub use error::{Result, TransportError};
pub use traits::Transport;
pub use ws::WsTransport;
