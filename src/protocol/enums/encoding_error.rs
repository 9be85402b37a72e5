#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    SerializationError(String),
    DeserializationError(String),
}
