use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientStats {
    pub started: i64,
    pub connections_active: i64,
    pub connects: i64,
    pub disconnects: i64,
    pub reconnect_attempts: i64,
    pub connect_failures: i64,
    pub messages_dispatched: i64,
    pub messages_unroutable: i64,
    pub messages_sent: i64,
    pub send_failures: i64,
    pub reports_sent: i64,
}
