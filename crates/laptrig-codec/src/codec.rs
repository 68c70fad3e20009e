use crate::error::{CodecError, Result};
use crate::event::Event;
use crate::verb::Verb;

/// Field separator used throughout the wire protocol.
pub const FIELD_SEPARATOR: char = ';';

/// Status tag announcing an unsolicited event.
pub const TAG_EVENT: &str = "EVT";

/// Status tag announcing a positive reply to the pending command.
pub const TAG_ACK: &str = "ACK";

/// Failure tag the device emits. Classification does not depend on it: any
/// tag other than `EVT`/`ACK` fails the pending command.
pub const TAG_NACK: &str = "NACK";

/// An inbound frame, classified by its status tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Unsolicited device notification.
    Event(Event),
    /// Positive reply. The fields decode against the pending verb's schema
    /// via [`Verb::decode_reply`].
    Ack(Vec<String>),
    /// Negative reply; carries the tag and no payload.
    Failure(String),
}

/// Encode one outgoing command frame.
///
/// Produces the bare wire name when there is no parameter, otherwise
/// `name;parameter`. Composite parameters (e.g. `"<group>:<name>"`) are
/// formatted by the caller.
pub fn encode_command(verb: Verb, parameter: Option<&str>) -> String {
    match parameter {
        Some(parameter) => format!("{}{}{}", verb.wire_name(), FIELD_SEPARATOR, parameter),
        None => verb.wire_name().to_string(),
    }
}

/// Classify one incoming frame.
///
/// Never panics on malformed input; anything unparseable is a [`CodecError`].
pub fn decode_frame(raw: &str) -> Result<Inbound> {
    if raw.is_empty() {
        return Err(CodecError::EmptyFrame);
    }

    let (tag, rest) = match raw.split_once(FIELD_SEPARATOR) {
        Some((tag, rest)) => (tag, Some(rest)),
        None => (raw, None),
    };

    match tag {
        TAG_EVENT => {
            let rest = rest.ok_or(CodecError::MissingEventKind)?;
            let mut parts = rest.split(FIELD_SEPARATOR);
            let kind = parts.next().unwrap_or("");
            let fields: Vec<&str> = parts.collect();
            Event::decode(kind, &fields).map(Inbound::Event)
        }
        TAG_ACK => {
            let fields = rest
                .map(|rest| rest.split(FIELD_SEPARATOR).map(str::to_owned).collect())
                .unwrap_or_default();
            Ok(Inbound::Ack(fields))
        }
        other => Ok(Inbound::Failure(other.to_string())),
    }
}
