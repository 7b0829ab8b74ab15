// ============================================
// Index Map - Ячейка -> индекс вершины
// ============================================
//
// Плотный массив по всем ячейкам сетки вместо HashMap.
// NO_VERTEX отмечает неактивные ячейки.

use ndshape::Shape;

use crate::grid::GridShape;

/// Ячейка не породила вершину
pub const NO_VERTEX: u32 = u32::MAX;

/// Отображение линейного индекса ячейки в индекс вершины
#[derive(Debug, Clone)]
pub struct IndexMap {
    cells: GridShape,
    slots: Vec<u32>,
}

impl IndexMap {
    pub fn new() -> Self {
        Self {
            cells: GridShape::new(0, 0, 0),
            slots: Vec::new(),
        }
    }

    /// Подготовить карту под сетку ячеек, сохраняя capacity
    pub fn reset(&mut self, cells: GridShape) {
        self.cells = cells;
        self.slots.clear();
        self.slots.resize(cells.size(), NO_VERTEX);
    }

    #[inline]
    pub fn cells(&self) -> GridShape {
        self.cells
    }

    #[inline]
    pub fn insert(&mut self, cell: [usize; 3], vertex: u32) {
        let idx = self.cells.linearize(cell);
        self.slots[idx] = vertex;
    }

    #[inline]
    pub fn get(&self, cell: [usize; 3]) -> Option<u32> {
        let [x, y, z] = cell;
        if x >= self.cells.width || y >= self.cells.height || z >= self.cells.depth {
            return None;
        }
        match self.slots[self.cells.linearize(cell)] {
            NO_VERTEX => None,
            v => Some(v),
        }
    }

    /// Вершина соседа cell - back; None если сосед за границей или неактивен
    #[inline]
    pub fn get_behind(&self, cell: [usize; 3], back: [usize; 3]) -> Option<u32> {
        let x = cell[0].checked_sub(back[0])?;
        let y = cell[1].checked_sub(back[1])?;
        let z = cell[2].checked_sub(back[2])?;
        self.get([x, y, z])
    }

    /// Число активных ячеек
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|v| **v != NO_VERTEX).count()
    }
}

impl Default for IndexMap {
    fn default() -> Self {
        Self::new()
    }
}
