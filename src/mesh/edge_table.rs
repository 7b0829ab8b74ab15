// ============================================
// Edge Table - Таблица пересекаемых рёбер куба
// ============================================
//
// Углы куба (биты ZYX):
//
//       6──────7
//      /│     /│        0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//     4─┼────5 │        4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//     │ 2────┼─3
//     │/     │/         +Y  +Z
//     0──────1           │ /
//                        └──+X
//
// Маска углов (8 бит) -> маска рёбер (12 бит).
// Ребро пересекает поверхность, если ровно один его конец снаружи.
// Таблица считается на этапе компиляции.

/// Рёбра куба как пары индексов углов
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1], // 0:  X, y=0 z=0
    [0, 2], // 1:  Y, x=0 z=0
    [1, 3], // 2:  Y, x=1 z=0
    [2, 3], // 3:  X, y=1 z=0
    [0, 4], // 4:  Z, x=0 y=0
    [1, 5], // 5:  Z, x=1 y=0
    [2, 6], // 6:  Z, x=0 y=1
    [3, 7], // 7:  Z, x=1 y=1
    [4, 5], // 8:  X, y=0 z=1
    [4, 6], // 9:  Y, x=0 z=1
    [5, 7], // 10: Y, x=1 z=1
    [6, 7], // 11: X, y=1 z=1
];

/// Рёбра, выходящие из угла 0 ячейки (по ним сшиваются квады)
pub const EDGE_X: u16 = 1 << 0;
pub const EDGE_Y: u16 = 1 << 1;
pub const EDGE_Z: u16 = 1 << 4;

/// Смещения углов внутри единичного куба
pub const CORNER_OFFSETS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Маска углов -> маска пересекаемых рёбер
pub static EDGE_TABLE: [u16; 256] = build_edge_table();

const fn build_edge_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut mask = 0;
    while mask < 256 {
        let mut edges = 0u16;
        let mut edge = 0;
        while edge < 12 {
            let a = (mask >> CUBE_EDGES[edge][0]) & 1;
            let b = (mask >> CUBE_EDGES[edge][1]) & 1;
            if a != b {
                edges |= 1 << edge;
            }
            edge += 1;
        }
        table[mask] = edges;
        mask += 1;
    }
    table
}

/// Пересекаемые рёбра для маски углов
#[inline]
pub fn crossing_edges(mask: u8) -> u16 {
    EDGE_TABLE[mask as usize]
}
