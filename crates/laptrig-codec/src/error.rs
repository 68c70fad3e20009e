/// Errors that can occur while encoding or decoding wire frames.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The frame was empty.
    #[error("empty frame")]
    EmptyFrame,

    /// An `EVT` frame carried no event kind.
    #[error("event frame without a kind")]
    MissingEventKind,

    /// The event kind is not part of the protocol.
    #[error("unknown event kind: {0:?}")]
    UnknownEventKind(String),

    /// The verb is not part of the protocol.
    #[error("unknown verb: {0:?}")]
    UnknownVerb(String),

    /// A field required by the frame's schema is absent.
    #[error("{frame} frame is missing field {index}")]
    MissingField { frame: &'static str, index: usize },

    /// A field could not be parsed as a number.
    #[error("{frame} frame field {index} is not a valid number: {value:?}")]
    InvalidNumber {
        frame: &'static str,
        index: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, CodecError>;
