// ============================================
// Tessellator - Сшивка ячеек в квады и треугольники
// ============================================
//
// Каждое пересечённое ребро из угла 0 ячейки общее для 4 ячеек.
// Все они уже обработаны (меньшие координаты), поэтому их вершины
// берутся из IndexMap. Если хотя бы одной нет - квад пропускается.
//
// Квад [a, b, c, d] режется по короткой диагонали (a-d или b-c).
// Шаблон выбирается по (угол 0 снаружи, какая диагональ) так, чтобы
// лицевые грани смотрели наружу (CCW при взгляде снаружи).

use super::edge_table::{EDGE_X, EDGE_Y, EDGE_Z};
use super::index_map::IndexMap;

/// Шаблоны порядка вершин: [угол 0 снаружи + 2 * (диагональ b-c)]
pub const QUAD_TEMPLATES: [[usize; 6]; 4] = [
    [0, 1, 3, 0, 3, 2],
    [0, 3, 1, 0, 2, 3],
    [0, 1, 2, 1, 3, 2],
    [0, 2, 1, 1, 2, 3],
];

/// Для каждого ребра из угла 0: смещения назад четырёх ячеек квада [a, b, c, d]
const STITCH_EDGES: [(u16, [[usize; 3]; 4]); 3] = [
    // +X: (x, y-1, z), (x, y-1, z-1), (x, y, z), (x, y, z-1)
    (EDGE_X, [[0, 1, 0], [0, 1, 1], [0, 0, 0], [0, 0, 1]]),
    // +Y: (x, y, z), (x, y, z-1), (x-1, y, z), (x-1, y, z-1)
    (EDGE_Y, [[0, 0, 0], [0, 0, 1], [1, 0, 0], [1, 0, 1]]),
    // +Z: (x-1, y-1, z), (x, y-1, z), (x-1, y, z), (x, y, z)
    (EDGE_Z, [[1, 1, 0], [0, 1, 0], [1, 0, 0], [0, 0, 0]]),
];

/// Результат сшивки по одному ребру
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stitch {
    /// Ребро не пересекает поверхность
    NoCrossing,
    /// Все четыре ячейки активны
    Quad([u32; 4]),
    /// Соседа нет (граница или неактивная ячейка) - квад не строится
    MissingNeighbor,
}

/// Диагональ, по которой режется квад
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagonal {
    AD,
    BC,
}

/// Собрать квады для трёх рёбер из угла 0 ячейки
pub fn stitch_cell(map: &IndexMap, cell: [usize; 3], edges: u16) -> [Stitch; 3] {
    STITCH_EDGES.map(|(bit, backs)| {
        if edges & bit == 0 {
            return Stitch::NoCrossing;
        }
        let mut quad = [0u32; 4];
        for (slot, back) in quad.iter_mut().zip(backs) {
            match map.get_behind(cell, back) {
                Some(v) => *slot = v,
                None => return Stitch::MissingNeighbor,
            }
        }
        Stitch::Quad(quad)
    })
}

#[inline]
fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Выбрать более короткую диагональ (при равенстве - a-d)
#[inline]
pub fn choose_diagonal(positions: &[[f32; 3]], quad: [u32; 4]) -> Diagonal {
    let [a, b, c, d] = quad.map(|i| positions[i as usize]);
    if distance_sq(a, d) > distance_sq(b, c) {
        Diagonal::BC
    } else {
        Diagonal::AD
    }
}

/// Разбить квад на два треугольника (6 индексов)
pub fn triangulate(positions: &[[f32; 3]], quad: [u32; 4], corner0_outside: bool) -> [u32; 6] {
    let diagonal = choose_diagonal(positions, quad);
    let template = usize::from(corner0_outside) + 2 * usize::from(diagonal == Diagonal::BC);
    QUAD_TEMPLATES[template].map(|k| quad[k])
}
