use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::endpoint::Endpoint;
use crate::error::{Result, TransportError};
use crate::traits::Transport;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket transport over `tokio-tungstenite`.
#[derive(Debug)]
pub struct WsTransport {
    stream: WsStream,
}

impl WsTransport {
    /// Open a connection to the endpoint.
    ///
    /// The endpoint is validated first; an invalid one fails without any
    /// network activity.
    pub async fn connect(endpoint: &Endpoint) -> Result<Self> {
        endpoint.validate()?;
        let url = endpoint.url();
        let (stream, _) = connect_async(&url)
            .await
            .map_err(|source| TransportError::Connect { url, source })?;
        Ok(Self { stream })
    }

    /// Wrap an already-established WebSocket stream.
    pub fn from_stream(stream: WsStream) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, frame: &str) -> Result<()> {
        self.stream
            .send(Message::Text(frame.to_string().into()))
            .await
            .map_err(TransportError::Ws)
    }

    async fn recv(&mut self) -> Option<Result<String>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.as_str().to_string())),
                Ok(Message::Close(_)) => return None,
                // Ping/pong are answered by tungstenite itself; binary
                // frames are not part of the protocol.
                Ok(other) => {
                    tracing::trace!(len = other.len(), "ignoring non-text frame");
                }
                Err(err) => return Some(Err(TransportError::Ws(err))),
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        self.stream.close(None).await.map_err(TransportError::Ws)
    }
}
