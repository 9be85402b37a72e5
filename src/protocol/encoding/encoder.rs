use serde::{de::DeserializeOwned, Serialize};
use crate::protocol::enums::encoding_error::EncodingError;
use crate::protocol::enums::report_encoding::ReportEncoding;

/// Serializes a payload body in the configured encoding.
pub fn encode<T: Serialize>(encoding: ReportEncoding, value: &T) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        // Named fields keep the report readable by peers that decode into maps.
        ReportEncoding::msgpack => rmp_serde::to_vec_named(value)
            .map_err(|e| EncodingError::SerializationError(e.to_string())),
        ReportEncoding::json => serde_json::to_vec(value)
            .map_err(|e| EncodingError::SerializationError(e.to_string())),
    }
}

pub fn decode<T: DeserializeOwned>(encoding: ReportEncoding, data: &[u8]) -> Result<T, EncodingError> {
    match encoding {
        ReportEncoding::msgpack => rmp_serde::from_slice(data)
            .map_err(|e| EncodingError::DeserializationError(e.to_string())),
        ReportEncoding::json => serde_json::from_slice(data)
            .map_err(|e| EncodingError::DeserializationError(e.to_string())),
    }
}
