use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct ClientStatsAtomics {
    pub started: AtomicI64,
    pub connections_active: AtomicI64,
    pub connects: AtomicI64,
    pub disconnects: AtomicI64,
    pub reconnect_attempts: AtomicI64,
    pub connect_failures: AtomicI64,
    pub messages_dispatched: AtomicI64,
    pub messages_unroutable: AtomicI64,
    pub messages_sent: AtomicI64,
    pub send_failures: AtomicI64,
    pub reports_sent: AtomicI64,
}
