use async_trait::async_trait;

use crate::error::Result;

/// An ordered, reliable, full-duplex text-frame channel.
///
/// Implementations deliver whole frames, in order. Close is signalled by
/// [`Transport::recv`] returning `None`; after that the transport is dead
/// and a new connection must be established.
#[async_trait]
pub trait Transport: Send {
    /// Send one text frame.
    async fn send(&mut self, frame: &str) -> Result<()>;

    /// Receive the next text frame. `None` means the peer closed.
    async fn recv(&mut self) -> Option<Result<String>>;

    /// Close the connection.
    async fn close(&mut self) -> Result<()>;
}
