pub mod encoding_error;
pub mod server_report;
