/// Library-wide error type.
pub mod mesh_error;
