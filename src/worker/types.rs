use std::sync::Arc;

use crate::grid::VoxelGrid;
use crate::mesh::{ExtractionStats, SurfaceMesh};

/// Запрос на извлечение поверхности
pub(super) struct MeshRequest {
    /// Неизменяемый снимок сетки
    pub grid: Arc<VoxelGrid>,
    pub version: u64,
}

/// Результат фонового извлечения
#[derive(Debug, Clone)]
pub struct MeshResult {
    /// Версия сетки, из которой построен меш
    pub version: u64,
    pub mesh: SurfaceMesh,
    pub stats: ExtractionStats,
}
