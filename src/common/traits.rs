/// Millisecond time source injected into the client service.
pub mod clock;
