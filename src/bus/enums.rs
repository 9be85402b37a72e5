/// Role of a process inside the mesh.
pub mod app_type;
