/// Four-field bus address.
pub mod bus_addr;
