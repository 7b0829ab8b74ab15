// ============================================
// Surface Nets - Извлечение изоповерхности из SDF сетки
// ============================================
//
// field  -> поля (sphere, torus, merge, translate) и JSON сцены
// grid   -> VoxelGrid (плотные сэмплы) + SharedGrid (copy-on-write)
// mesh   -> EdgeTable, CellProcessor, Tessellator, SurfaceMesh
// worker -> фоновое извлечение по снимкам сетки
// save   -> снимки сетки на диске (bincode + ZSTD)
//
// Соглашение о знаке: > 0 снаружи, <= 0 внутри.

pub mod error;
pub mod field;
pub mod grid;
pub mod mesh;
pub mod worker;
pub mod save;

pub use error::{GridError, SaveError, SceneError};
pub use field::{merge, sphere, torus, translate, Field, FieldDesc, SceneConfig};
pub use grid::{GridShape, SharedGrid, VoxelGrid};
pub use mesh::{
    extract_batch, extract_surface, extract_surface_into, ExtractionStats, MeshVertex,
    MeshingContext, SurfaceMesh,
};
pub use worker::{MeshResult, MeshWorker};
pub use save::GridFile;
