// ============================================
// Mesh Module - Surface Nets
// ============================================
//
// edge_table -> cell (вершина + нормаль) -> tessellate (квады) -> SurfaceMesh

mod edge_table;
mod cell;
mod index_map;
mod tessellate;
mod vertex;
mod surface_mesh;
mod context;
mod extract;

pub use edge_table::{crossing_edges, CORNER_OFFSETS, CUBE_EDGES, EDGE_TABLE, EDGE_X, EDGE_Y, EDGE_Z};
pub use cell::{crossing_parameter, estimate_normal, gather_corners, process_cell, CellVertex, CornerMask};
pub use index_map::{IndexMap, NO_VERTEX};
pub use tessellate::{choose_diagonal, stitch_cell, triangulate, Diagonal, Stitch, QUAD_TEMPLATES};
pub use vertex::MeshVertex;
pub use surface_mesh::SurfaceMesh;
pub use context::{with_meshing_context, MeshingContext};
pub use extract::{extract_batch, extract_surface, extract_surface_into, ExtractionStats};
