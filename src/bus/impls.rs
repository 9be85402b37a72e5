pub mod app_type;
pub mod bus_addr;
