use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::client_stats::ClientStats;
use crate::stats::structs::client_stats_atomics::ClientStatsAtomics;

impl ClientStatsAtomics {
    pub fn new() -> ClientStatsAtomics {
        ClientStatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            connections_active: AtomicI64::new(0),
            connects: AtomicI64::new(0),
            disconnects: AtomicI64::new(0),
            reconnect_attempts: AtomicI64::new(0),
            connect_failures: AtomicI64::new(0),
            messages_dispatched: AtomicI64::new(0),
            messages_unroutable: AtomicI64::new(0),
            messages_sent: AtomicI64::new(0),
            send_failures: AtomicI64::new(0),
            reports_sent: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::ConnectionsActive => &self.connections_active,
            StatsEvent::Connects => &self.connects,
            StatsEvent::Disconnects => &self.disconnects,
            StatsEvent::ReconnectAttempts => &self.reconnect_attempts,
            StatsEvent::ConnectFailures => &self.connect_failures,
            StatsEvent::MessagesDispatched => &self.messages_dispatched,
            StatsEvent::MessagesUnroutable => &self.messages_unroutable,
            StatsEvent::MessagesSent => &self.messages_sent,
            StatsEvent::SendFailures => &self.send_failures,
            StatsEvent::ReportsSent => &self.reports_sent,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> i64 {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        counter.load(Ordering::SeqCst)
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn get(&self, event: StatsEvent) -> i64 {
        self.counter(event).load(Ordering::SeqCst)
    }

    pub fn get_stats(&self) -> ClientStats {
        ClientStats {
            started: self.started.load(Ordering::SeqCst),
            connections_active: self.connections_active.load(Ordering::SeqCst),
            connects: self.connects.load(Ordering::SeqCst),
            disconnects: self.disconnects.load(Ordering::SeqCst),
            reconnect_attempts: self.reconnect_attempts.load(Ordering::SeqCst),
            connect_failures: self.connect_failures.load(Ordering::SeqCst),
            messages_dispatched: self.messages_dispatched.load(Ordering::SeqCst),
            messages_unroutable: self.messages_unroutable.load(Ordering::SeqCst),
            messages_sent: self.messages_sent.load(Ordering::SeqCst),
            send_failures: self.send_failures.load(Ordering::SeqCst),
            reports_sent: self.reports_sent.load(Ordering::SeqCst),
        }
    }
}

impl Default for ClientStatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}
