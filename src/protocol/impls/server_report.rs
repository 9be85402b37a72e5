use crate::bus::types::BusId;
use crate::protocol::encoding::encoder::{decode, encode};
use crate::protocol::enums::encoding_error::EncodingError;
use crate::protocol::enums::logic_status::LogicStatus;
use crate::protocol::enums::report_encoding::ReportEncoding;
use crate::protocol::structs::server_report::ServerReport;

impl ServerReport {
    pub fn new(bus_id: BusId, cur_online: u32, url: &str, max_online: u32, logic_status: LogicStatus) -> Self {
        Self {
            bus_id,
            cur_online,
            url: url.to_string(),
            max_online,
            logic_status,
        }
    }

    pub fn to_bytes(&self, encoding: ReportEncoding) -> Result<Vec<u8>, EncodingError> {
        encode(encoding, self)
    }

    pub fn from_bytes(encoding: ReportEncoding, data: &[u8]) -> Result<ServerReport, EncodingError> {
        decode(encoding, data)
    }
}
