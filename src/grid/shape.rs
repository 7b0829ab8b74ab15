// ============================================
// Grid Shape - Линеаризация координат сетки
// ============================================
//
// Единственное место, где задан порядок сэмплов в плоском буфере:
// index = x + y * width + z * width * height (x быстрее всех).
// Используется и для сэмплов, и для ячеек (cells = dims - 1).

use ndshape::Shape;

/// Форма 3D массива с порядком x -> y -> z
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl GridShape {
    #[inline]
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self { width, height, depth }
    }

    /// Форма сетки ячеек (кубов между сэмплами)
    ///
    /// Для размерности < 2 ячеек по этой оси нет.
    #[inline]
    pub fn cells(&self) -> Self {
        Self {
            width: self.width.saturating_sub(1),
            height: self.height.saturating_sub(1),
            depth: self.depth.saturating_sub(1),
        }
    }

    /// Число элементов; None при переполнении usize
    #[inline]
    pub fn checked_size(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(self.depth)
    }

    /// Шаг по Y в плоском буфере
    #[inline]
    pub const fn stride_y(&self) -> usize {
        self.width
    }

    /// Шаг по Z в плоском буфере
    #[inline]
    pub const fn stride_z(&self) -> usize {
        self.width * self.height
    }
}

impl Shape<3> for GridShape {
    type Coord = usize;

    #[inline]
    fn as_array(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    #[inline]
    fn size(&self) -> usize {
        self.width * self.height * self.depth
    }

    #[inline]
    fn usize(&self) -> usize {
        self.size()
    }

    #[inline]
    fn linearize(&self, coords: [usize; 3]) -> usize {
        let [x, y, z] = coords;
        x + y * self.width + z * self.width * self.height
    }

    #[inline]
    fn delinearize(&self, i: usize) -> [usize; 3] {
        let x = i % self.width;
        let yz = i / self.width;
        [x, yz % self.height, yz / self.height]
    }
}
