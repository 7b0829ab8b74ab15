// ============================================
// Grid Module - Воксельная сетка сэмплов
// ============================================

mod shape;
mod voxel_grid;
mod shared;

pub use shape::GridShape;
pub use voxel_grid::VoxelGrid;
pub use shared::SharedGrid;
