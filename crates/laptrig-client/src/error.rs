use laptrig_codec::Verb;

/// Errors surfaced to callers of the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] laptrig_transport::TransportError),

    /// A frame or reply could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] laptrig_codec::CodecError),

    /// An operation argument failed validation; nothing was enqueued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The device answered the command with a failure tag.
    #[error("{verb} failed: device answered {tag:?}")]
    CommandFailed { verb: Verb, tag: String },

    /// The decoded reply did not match the verb that was pending.
    #[error("unexpected reply shape for {verb}")]
    UnexpectedReply { verb: Verb },

    /// No session is running; the command was not enqueued.
    #[error("not connected")]
    NotConnected,

    /// The connection closed while the command was queued or in flight.
    #[error("connection closed before {verb} completed")]
    Aborted { verb: Verb },
}

pub type Result<T> = std::result::Result<T, ClientError>;
