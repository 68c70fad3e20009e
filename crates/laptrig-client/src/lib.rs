//! Session layer for the lap-trigger device: a strict one-in-flight command
//! queue over a text-frame transport.
//!
//! The protocol carries no request IDs. Correlation works because at most
//! one command is ever awaiting its reply: a frame tagged `ACK` (or any
//! failure tag) always answers the single pending command, and `EVT` frames
//! are routed to the registered observer instead. Commands submitted while
//! another is in flight wait in a FIFO queue; strict send/receive order is
//! the only correctness mechanism, so the transport must never reorder.

mod command;
mod session;

pub mod client;
pub mod error;

pub use client::{Client, ClosedHook, ConnectOptions, EventObserver};
pub use error::{ClientError, Result};

pub use laptrig_codec::{Event, Reply, Verb};
pub use laptrig_transport::{Endpoint, Transport};
