use serde::Serialize;

use crate::error::{CodecError, Result};
use crate::field;

/// Wire kind of [`Event::Started`].
pub const KIND_STARTED: &str = "STARTED";
/// Wire kind of [`Event::Finished`].
pub const KIND_FINISHED: &str = "FINISHED";
/// Wire kind of [`Event::Table`].
pub const KIND_TABLE: &str = "TABLE";

/// An unsolicited notification from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// A run has started. No further fields.
    Started,
    /// A run has finished.
    Finished {
        /// Run duration in milliseconds.
        duration: u32,
        /// Group the run belongs to.
        active_group: u32,
    },
    /// One row of the lap table. The device streams one `TABLE` event per
    /// group after acknowledging `GET_TABLE`.
    Table {
        /// Group index of this row.
        group: u32,
        /// Lap time in milliseconds.
        duration: u32,
        /// Display name of the group.
        name: String,
    },
}

impl Event {
    /// Decode an event from its kind and the fields that follow it.
    pub fn decode(kind: &str, fields: &[&str]) -> Result<Event> {
        match kind {
            KIND_STARTED => Ok(Event::Started),
            KIND_FINISHED => Ok(Event::Finished {
                duration: field::uint(KIND_FINISHED, fields, 0)?,
                active_group: field::uint(KIND_FINISHED, fields, 1)?,
            }),
            KIND_TABLE => Ok(Event::Table {
                group: field::uint(KIND_TABLE, fields, 0)?,
                duration: field::uint(KIND_TABLE, fields, 1)?,
                name: field::text(KIND_TABLE, fields, 2)?.to_string(),
            }),
            other => Err(CodecError::UnknownEventKind(other.to_string())),
        }
    }

    /// The wire kind of this event.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Started => KIND_STARTED,
            Event::Finished { .. } => KIND_FINISHED,
            Event::Table { .. } => KIND_TABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_takes_no_fields() {
        assert_eq!(Event::decode("STARTED", &[]).unwrap(), Event::Started);
    }

    #[test]
    fn finished_decodes_duration_and_group() {
        let event = Event::decode("FINISHED", &["120", "3"]).unwrap();
        assert_eq!(
            event,
            Event::Finished {
                duration: 120,
                active_group: 3,
            }
        );
    }

    #[test]
    fn table_decodes_row() {
        let event = Event::decode("TABLE", &["0", "4815", "Group A"]).unwrap();
        assert_eq!(
            event,
            Event::Table {
                group: 0,
                duration: 4815,
                name: "Group A".to_string(),
            }
        );
    }

    #[test]
    fn finished_with_missing_group_is_an_error() {
        let err = Event::decode("FINISHED", &["120"]).unwrap_err();
        assert_eq!(
            err,
            CodecError::MissingField {
                frame: "FINISHED",
                index: 1,
            }
        );
    }

    #[test]
    fn finished_with_garbage_duration_is_an_error() {
        let err = Event::decode("FINISHED", &["soon", "3"]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidNumber { index: 0, .. }));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = Event::decode("LAPPED", &[]).unwrap_err();
        assert_eq!(err, CodecError::UnknownEventKind("LAPPED".to_string()));
    }

    #[test]
    fn serializes_with_wire_kind_tag() {
        let json = serde_json::to_value(Event::Finished {
            duration: 120,
            active_group: 3,
        })
        .unwrap();
        assert_eq!(json["event"], "FINISHED");
        assert_eq!(json["duration"], 120);
        assert_eq!(json["active_group"], 3);
    }
}
