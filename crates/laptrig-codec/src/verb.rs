use std::fmt;

use crate::error::{CodecError, Result};
use crate::field;
use crate::reply::Reply;

/// A protocol verb: the wire name of a command the device understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Release a group's starter.
    Release,
    /// Ask for the configured number of groups.
    GetGroups,
    /// Resize the number of groups.
    SetGroups,
    /// Ask for the lap table; rows follow as `TABLE` events.
    GetTable,
    /// Clear a group's lap time.
    Clear,
    /// Set a group's display name.
    SetName,
    /// Fetch a group's display name.
    GetName,
    /// Remove a group's display name.
    ClearName,
    /// Reject the pending run.
    RejectRun,
}

impl Verb {
    /// Every verb the protocol defines.
    pub const ALL: [Verb; 9] = [
        Verb::Release,
        Verb::GetGroups,
        Verb::SetGroups,
        Verb::GetTable,
        Verb::Clear,
        Verb::SetName,
        Verb::GetName,
        Verb::ClearName,
        Verb::RejectRun,
    ];

    /// The name this verb carries on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Verb::Release => "RELEASE",
            Verb::GetGroups => "GET_GROUPS",
            Verb::SetGroups => "SET_GROUPS",
            Verb::GetTable => "GET_TABLE",
            Verb::Clear => "CLEAR",
            Verb::SetName => "SET_NAME",
            Verb::GetName => "GET_NAME",
            Verb::ClearName => "CLEAR_NAME",
            Verb::RejectRun => "REJECT_RUN",
        }
    }

    /// Look up a verb by its wire name.
    pub fn from_wire(name: &str) -> Result<Verb> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.wire_name() == name)
            .ok_or_else(|| CodecError::UnknownVerb(name.to_string()))
    }

    /// Decode an `ACK` payload against this verb's reply schema.
    ///
    /// The protocol carries no request IDs and no verb echo; the reply shape
    /// is determined entirely by the command that was pending when the frame
    /// arrived. Fields are positional, starting right after the status tag.
    pub fn decode_reply<S: AsRef<str>>(self, fields: &[S]) -> Result<Reply> {
        let name = self.wire_name();
        match self {
            Verb::Release => {
                let mut data = Vec::with_capacity(fields.len());
                for (index, value) in fields.iter().enumerate() {
                    let value = value.as_ref();
                    let byte = u8::from_str_radix(value, 16).map_err(|_| {
                        CodecError::InvalidNumber {
                            frame: name,
                            index,
                            value: value.to_string(),
                        }
                    })?;
                    data.push(byte);
                }
                Ok(Reply::Released { data })
            }
            Verb::GetGroups => Ok(Reply::Groups {
                count: field::uint(name, fields, 0)?,
            }),
            Verb::SetGroups => Ok(Reply::GroupsSet),
            Verb::GetTable => Ok(Reply::Table {
                rows: field::uint(name, fields, 0)?,
            }),
            Verb::Clear => Ok(Reply::Cleared {
                group: field::uint(name, fields, 0)?,
            }),
            Verb::SetName | Verb::GetName => Ok(Reply::Name {
                group: field::uint(name, fields, 0)?,
                name: field::text(name, fields, 1)?.to_string(),
            }),
            Verb::ClearName => Ok(Reply::NameCleared {
                group: field::uint(name, fields, 0)?,
            }),
            Verb::RejectRun => Ok(Reply::RunRejected),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
