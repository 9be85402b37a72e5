/// MessagePack / JSON payload codec.
pub mod encoder;
