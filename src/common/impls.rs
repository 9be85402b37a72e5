pub mod custom_error;
pub mod system_clock;
pub mod manual_clock;
