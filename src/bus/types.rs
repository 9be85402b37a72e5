/// Packed bus address: channel, zone, app type and instance, big-endian.
pub type BusId = u32;
