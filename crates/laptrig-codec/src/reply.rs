use serde::Serialize;

/// The decoded payload of a positive reply, shaped by the verb that was
/// pending when it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// `RELEASE` — byte values reported by the starter hardware.
    Released { data: Vec<u8> },
    /// `GET_GROUPS` — the configured number of groups.
    Groups { count: u32 },
    /// `SET_GROUPS` — carries no payload.
    GroupsSet,
    /// `GET_TABLE` — number of rows that will follow as `TABLE` events.
    Table { rows: u32 },
    /// `CLEAR` — index of the cleared group.
    Cleared { group: u32 },
    /// `SET_NAME` / `GET_NAME` — the group index and its display name.
    Name { group: u32, name: String },
    /// `CLEAR_NAME` — index of the group whose name was removed.
    NameCleared { group: u32 },
    /// `REJECT_RUN` — carries no payload.
    RunRejected,
}
