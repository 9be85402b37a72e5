use serde::{Deserialize, Serialize};

/// Every counter the client service maintains.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    ConnectionsActive,
    Connects,
    Disconnects,
    ReconnectAttempts,
    ConnectFailures,
    MessagesDispatched,
    MessagesUnroutable,
    MessagesSent,
    SendFailures,
    ReportsSent,
}
