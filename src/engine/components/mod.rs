pub mod material;
pub mod mesh;
pub mod table;

pub use material::Material;
pub use mesh::MeshBuffers;
pub use table::{ DrawPass, TableDrawer };
