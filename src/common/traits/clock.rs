/// Source of the current time in milliseconds.
///
/// The client service never sleeps; reconnect and keepalive timers are
/// checks of recorded timestamps against this clock.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}
