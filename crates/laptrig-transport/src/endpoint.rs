use std::fmt;

use crate::error::{Result, TransportError};

const SCHEMES: [&str; 2] = ["ws", "wss"];

/// Location of the device's WebSocket endpoint.
///
/// All four parts are required. [`Endpoint::validate`] runs before any I/O;
/// an endpoint that fails it never constructs a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// URL scheme, `ws` or `wss`.
    pub scheme: String,
    /// Host name or address of the device.
    pub host: String,
    /// TCP port. The device serves its socket on port 81.
    pub port: u16,
    /// URL path, starting with `/`.
    pub path: String,
}

impl Endpoint {
    /// Build an endpoint from its parts.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// Check that the endpoint can be turned into a usable URL.
    pub fn validate(&self) -> Result<()> {
        if !SCHEMES.contains(&self.scheme.as_str()) {
            return Err(TransportError::InvalidEndpoint(format!(
                "scheme must be ws or wss, got {:?}",
                self.scheme
            )));
        }
        if self.host.is_empty() {
            return Err(TransportError::InvalidEndpoint(
                "host must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(TransportError::InvalidEndpoint(
                "port must be non-zero".to_string(),
            ));
        }
        if !self.path.starts_with('/') {
            return Err(TransportError::InvalidEndpoint(format!(
                "path must start with '/', got {:?}",
                self.path
            )));
        }
        Ok(())
    }

    /// The URL this endpoint denotes.
    pub fn url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
