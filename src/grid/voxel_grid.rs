// ============================================
// Voxel Grid - Плотная сетка сэмплов SDF
// ============================================
//
// Сэмплы лежат в центрах вокселей: (x + 0.5, y + 0.5, z + 0.5).
// Значение > 0 - снаружи, <= 0 - внутри.
// Пустая сетка заполнена +inf (всё снаружи).

use ndshape::Shape;
use rayon::prelude::*;

use crate::error::GridError;
use super::shape::GridShape;

/// Плотная 3D сетка скалярных сэмплов
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGrid {
    shape: GridShape,
    samples: Vec<f32>,
}

impl VoxelGrid {
    /// Создать сетку, заполненную +inf
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self, GridError> {
        let (shape, size) = Self::validate(width, height, depth)?;
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(size)
            .map_err(|_| GridError::TooLarge { width, height, depth })?;
        samples.resize(size, f32::INFINITY);
        Ok(Self { shape, samples })
    }

    /// Кубическая сетка size x size x size
    pub fn cube(size: usize) -> Result<Self, GridError> {
        Self::new(size, size, size)
    }

    /// Собрать сетку из готового буфера сэмплов
    pub fn from_samples(
        width: usize,
        height: usize,
        depth: usize,
        samples: Vec<f32>,
    ) -> Result<Self, GridError> {
        let (shape, size) = Self::validate(width, height, depth)?;
        if samples.len() != size {
            return Err(GridError::SampleCountMismatch {
                expected: size,
                actual: samples.len(),
            });
        }
        Ok(Self { shape, samples })
    }

    /// Проверить размеры без выделения памяти
    pub fn check_dims(width: usize, height: usize, depth: usize) -> Result<(), GridError> {
        Self::validate(width, height, depth).map(|_| ())
    }

    /// Проверить размеры и посчитать число сэмплов без переполнения
    fn validate(width: usize, height: usize, depth: usize) -> Result<(GridShape, usize), GridError> {
        if width < 1 || height < 1 || depth < 1 {
            return Err(GridError::InvalidDimension { width, height, depth });
        }
        let shape = GridShape::new(width, height, depth);
        let too_large = GridError::TooLarge { width, height, depth };
        let size = shape.checked_size().ok_or(too_large)?;
        // Vec не может занимать больше isize::MAX байт
        let bytes = size.checked_mul(std::mem::size_of::<f32>()).ok_or(too_large)?;
        if bytes > isize::MAX as usize {
            return Err(too_large);
        }
        Ok((shape, size))
    }

    /// Нарисовать поле в сетку (объединение через min)
    ///
    /// `sampler` вызывается ровно один раз на воксель, в его центре.
    /// Слои по Z обрабатываются параллельно, каждый воксель пишет
    /// ровно одна задача, поэтому результат детерминирован.
    pub fn paint<F>(&mut self, sampler: F)
    where
        F: Fn(f32, f32, f32) -> f32 + Sync,
    {
        let shape = self.shape;
        let slab = shape.stride_z();

        self.samples
            .par_chunks_mut(slab)
            .enumerate()
            .for_each(|(z, layer)| {
                let pz = z as f32 + 0.5;
                for y in 0..shape.height {
                    let py = y as f32 + 0.5;
                    let row = &mut layer[y * shape.width..(y + 1) * shape.width];
                    for (x, sample) in row.iter_mut().enumerate() {
                        let value = sampler(x as f32 + 0.5, py, pz);
                        *sample = sample.min(value);
                    }
                }
            });

        log::trace!(
            "painted field into {}x{}x{} grid",
            shape.width, shape.height, shape.depth
        );
    }

    /// Сбросить все сэмплы в +inf
    pub fn clear(&mut self) {
        self.samples.fill(f32::INFINITY);
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Размеры (width, height, depth)
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.shape.as_array()
    }

    #[inline]
    pub fn width(&self) -> usize { self.shape.width }

    #[inline]
    pub fn height(&self) -> usize { self.shape.height }

    #[inline]
    pub fn depth(&self) -> usize { self.shape.depth }

    /// Размеры сетки ячеек (dims - 1, не меньше 0)
    #[inline]
    pub fn cell_dims(&self) -> [usize; 3] {
        self.shape.cells().as_array()
    }

    /// Количество ячеек (кубов из 8 сэмплов)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.shape.cells().size()
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Забрать буфер сэмплов
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Получить сэмпл (None за пределами сетки)
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.shape.width || y >= self.shape.height || z >= self.shape.depth {
            return None;
        }
        Some(self.samples[self.shape.linearize([x, y, z])])
    }

    /// Записать сэмпл, возвращает false за пределами сетки
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) -> bool {
        if x >= self.shape.width || y >= self.shape.height || z >= self.shape.depth {
            return false;
        }
        let idx = self.shape.linearize([x, y, z]);
        self.samples[idx] = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_dims_are_rejected() {
        let err = VoxelGrid::new(usize::MAX, 2, 1).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));

        // Произведение помещается в usize, но не в адресное пространство
        let err = VoxelGrid::new(1 << 40, 1 << 20, 1).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));

        let err = VoxelGrid::from_samples(1 << 32, 1 << 32, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));
    }

    #[test]
    fn new_fills_with_infinity() {
        let grid = VoxelGrid::new(3, 2, 4).unwrap();
        assert_eq!(grid.samples().len(), 24);
        assert!(grid.samples().iter().all(|s| *s == f32::INFINITY));
        assert_eq!(grid.cell_dims(), [2, 1, 3]);
        assert_eq!(grid.cell_count(), 6);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            VoxelGrid::new(4, 0, 4),
            Err(GridError::InvalidDimension { width: 4, height: 0, depth: 4 })
        );
    }

    #[test]
    fn paint_samples_voxel_centers() {
        let mut grid = VoxelGrid::new(3, 3, 3).unwrap();
        grid.paint(|x, y, z| x * 100.0 + y * 10.0 + z);
        assert_eq!(grid.get(0, 0, 0), Some(55.5));
        assert_eq!(grid.get(2, 1, 0), Some(265.5));
        assert_eq!(grid.get(0, 0, 2), Some(57.5));
    }

    #[test]
    fn paint_composes_by_minimum() {
        let mut grid = VoxelGrid::new(4, 1, 1).unwrap();
        grid.paint(|x, _, _| x - 2.0);
        grid.paint(|_, _, _| 0.25);
        assert_eq!(grid.samples(), &[-1.5, -0.5, 0.25, 0.25]);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut grid = VoxelGrid::new(2, 2, 2).unwrap();
        assert!(!grid.set(2, 0, 0, -1.0));
        assert!(grid.set(1, 1, 1, -1.0));
        assert_eq!(grid.get(1, 1, 1), Some(-1.0));
        assert_eq!(grid.get(0, 5, 0), None);
    }

    #[test]
    fn from_samples_validates_length() {
        let err = VoxelGrid::from_samples(2, 2, 2, vec![0.0; 7]).unwrap_err();
        assert_eq!(err, GridError::SampleCountMismatch { expected: 8, actual: 7 });
    }
}
