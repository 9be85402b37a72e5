/// Header layout selector.
pub mod head_length;

/// Connection event kinds.
pub mod net_event_type;

/// Transport protocol tags.
pub mod protocol;
