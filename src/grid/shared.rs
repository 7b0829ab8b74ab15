// ============================================
// Shared Grid - Copy-on-write сетка для фонового меширования
// ============================================
//
// Интерактивный поток рисует в сетку, фоновый поток мешит снимок.
// Снимок - это Arc<VoxelGrid>. Пока снимок жив, paint() копирует
// сетку (Arc::make_mut), поэтому воркер никогда не видит запись.

use std::sync::Arc;

use crate::error::GridError;
use super::voxel_grid::VoxelGrid;

/// Сетка с версией и дешёвыми снимками
#[derive(Clone, Debug)]
pub struct SharedGrid {
    grid: Arc<VoxelGrid>,
    version: u64,
}

impl SharedGrid {
    pub fn new(grid: VoxelGrid) -> Self {
        Self { grid: Arc::new(grid), version: 0 }
    }

    pub fn with_dims(width: usize, height: usize, depth: usize) -> Result<Self, GridError> {
        Ok(Self::new(VoxelGrid::new(width, height, depth)?))
    }

    /// Нарисовать поле; копирует сетку, если есть живые снимки
    pub fn paint<F>(&mut self, sampler: F)
    where
        F: Fn(f32, f32, f32) -> f32 + Sync,
    {
        Arc::make_mut(&mut self.grid).paint(sampler);
        self.version += 1;
    }

    /// Произвольное изменение сетки
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut VoxelGrid) -> R) -> R {
        let result = f(Arc::make_mut(&mut self.grid));
        self.version += 1;
        result
    }

    /// Неизменяемый снимок текущего состояния
    #[inline]
    pub fn snapshot(&self) -> Arc<VoxelGrid> {
        Arc::clone(&self.grid)
    }

    /// Номер версии, растёт при каждом изменении
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_isolated_from_later_paint() {
        let mut shared = SharedGrid::with_dims(2, 2, 2).unwrap();
        let before = shared.snapshot();

        shared.paint(|_, _, _| -1.0);

        assert_eq!(shared.version(), 1);
        assert!(before.samples().iter().all(|s| *s == f32::INFINITY));
        assert!(shared.grid().samples().iter().all(|s| *s == -1.0));
    }

    #[test]
    fn paint_without_snapshot_reuses_buffer() {
        let mut shared = SharedGrid::with_dims(2, 2, 2).unwrap();
        let ptr = shared.grid().samples().as_ptr();
        shared.paint(|_, _, _| 1.0);
        assert_eq!(shared.grid().samples().as_ptr(), ptr);
    }

    #[test]
    fn modify_bumps_version() {
        let mut shared = SharedGrid::with_dims(2, 2, 2).unwrap();
        let written = shared.modify(|g| g.set(0, 0, 0, -2.0));
        assert!(written);
        assert_eq!(shared.version(), 1);
        assert_eq!(shared.grid().get(0, 0, 0), Some(-2.0));
    }
}
