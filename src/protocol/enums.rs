pub mod encoding_error;
pub mod logic_status;
pub mod report_encoding;
