pub type MsgId = u16;

/// Locally assigned id of one live transport session.
pub type SessionId = i64;
