// ============================================
// Cell Processor - Вершина одной ячейки
// ============================================
//
// Ячейка - куб из 8 соседних сэмплов. Для активной ячейки:
// 1. Маска углов (бит j = сэмпл снаружи, > 0)
// 2. Пересекаемые рёбра из EDGE_TABLE
// 3. Корень на каждом ребре: t = -d0 / (d1 - d0)
// 4. Вершина = среднее точек пересечения
// 5. Нормаль = конечные разности по 8 сэмплам ячейки
//
// Ноль считается "внутри": снаружи только строго > 0.

use ultraviolet::Vec3;

use crate::grid::GridShape;
use super::edge_table::{crossing_edges, CORNER_OFFSETS, CUBE_EDGES};

/// Маска углов ячейки: бит j установлен, если угол j снаружи
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CornerMask(pub u8);

impl CornerMask {
    /// Собрать маску из 8 сэмплов углов
    #[inline]
    pub fn from_corners(corners: &[f32; 8]) -> Self {
        let mut mask = 0u8;
        for (j, &d) in corners.iter().enumerate() {
            if d > 0.0 {
                mask |= 1 << j;
            }
        }
        Self(mask)
    }

    /// Все углы по одну сторону - пересечений нет
    #[inline]
    pub fn is_trivial(self) -> bool {
        self.0 == 0x00 || self.0 == 0xFF
    }

    #[inline]
    pub fn is_outside(self, corner: usize) -> bool {
        self.0 & (1 << corner) != 0
    }

    /// Биты углов внутри поверхности (инверсия маски)
    #[inline]
    pub fn inside_bits(self) -> u8 {
        !self.0
    }

    /// 12-битная маска пересекаемых рёбер
    #[inline]
    pub fn crossing_edges(self) -> u16 {
        crossing_edges(self.0)
    }
}

/// Результат обработки активной ячейки
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub mask: CornerMask,
    pub edges: u16,
}

impl CellVertex {
    /// Число пересечённых рёбер
    #[inline]
    pub fn crossing_count(&self) -> u32 {
        self.edges.count_ones()
    }
}

/// Прочитать 8 сэмплов углов ячейки (x, y, z)
#[inline]
pub fn gather_corners(samples: &[f32], shape: GridShape, cell: [usize; 3]) -> [f32; 8] {
    let [x, y, z] = cell;
    let sy = shape.stride_y();
    let sz = shape.stride_z();
    let i = x + y * sy + z * sz;
    [
        samples[i],
        samples[i + 1],
        samples[i + sy],
        samples[i + sy + 1],
        samples[i + sz],
        samples[i + sz + 1],
        samples[i + sz + sy],
        samples[i + sz + sy + 1],
    ]
}

/// Обработать ячейку; None для неактивной ячейки
pub fn process_cell(corners: &[f32; 8], cell: [usize; 3]) -> Option<CellVertex> {
    let mask = CornerMask::from_corners(corners);
    if mask.is_trivial() {
        return None;
    }

    let edges = mask.crossing_edges();
    let mut sum = Vec3::zero();
    let mut count = 0u32;

    for (k, &[c0, c1]) in CUBE_EDGES.iter().enumerate() {
        if edges & (1 << k) == 0 {
            continue;
        }
        let t = crossing_parameter(corners[c0], corners[c1]);
        let p0 = Vec3::from(CORNER_OFFSETS[c0]);
        let p1 = Vec3::from(CORNER_OFFSETS[c1]);
        sum += p0 + (p1 - p0) * t;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    // Сэмплы лежат в центрах вокселей, поэтому сдвиг на 0.5
    let offset = sum / count as f32;
    let position = Vec3::new(
        cell[0] as f32 + 0.5 + offset.x,
        cell[1] as f32 + 0.5 + offset.y,
        cell[2] as f32 + 0.5 + offset.z,
    );
    let normal = estimate_normal(corners, mask);

    Some(CellVertex {
        position: [position.x, position.y, position.z],
        normal: [normal.x, normal.y, normal.z],
        mask,
        edges,
    })
}

/// Параметр пересечения нуля на ребре, всегда в [0, 1]
///
/// Бесконечный конец (сетка заполняется +inf) сдвигает точку к конечному
/// концу. Равные значения и две бесконечности дают середину ребра.
#[inline]
pub fn crossing_parameter(d0: f32, d1: f32) -> f32 {
    let t = match (d0.is_finite(), d1.is_finite()) {
        (true, true) => {
            let denom = d1 - d0;
            if denom == 0.0 {
                log::trace!("equal samples on crossing edge: {}", d0);
                0.5
            } else {
                -d0 / denom
            }
        }
        (false, true) => 1.0,
        (true, false) => 0.0,
        (false, false) => 0.5,
    };
    if t.is_nan() {
        0.5
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Нормаль по градиенту 8 сэмплов ячейки
///
/// По каждой оси - сумма четырёх разностей вдоль этой оси.
/// Нулевой или нечисловой градиент заменяется нормалью по маске.
pub fn estimate_normal(corners: &[f32; 8], mask: CornerMask) -> Vec3 {
    let [d0, d1, d2, d3, d4, d5, d6, d7] = *corners;
    let gradient = Vec3::new(
        (d1 - d0) + (d3 - d2) + (d5 - d4) + (d7 - d6),
        (d2 - d0) + (d3 - d1) + (d6 - d4) + (d7 - d5),
        (d4 - d0) + (d5 - d1) + (d6 - d2) + (d7 - d3),
    );

    if let Some(n) = normalize(gradient) {
        return n;
    }

    log::trace!("degenerate gradient, mask {:08b}", mask.0);
    mask_normal(mask)
}

/// Направление от внутренних углов к внешним
fn mask_normal(mask: CornerMask) -> Vec3 {
    let mut dir = Vec3::zero();
    for (j, offset) in CORNER_OFFSETS.iter().enumerate() {
        let centered = Vec3::from(*offset) - Vec3::broadcast(0.5);
        if mask.is_outside(j) {
            dir += centered;
        } else {
            dir -= centered;
        }
    }
    normalize(dir).unwrap_or_else(Vec3::unit_z)
}

/// Нормализация с масштабированием (без переполнения и потери точности)
#[inline]
fn normalize(v: Vec3) -> Option<Vec3> {
    if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
        return None;
    }
    let scale = v.x.abs().max(v.y.abs()).max(v.z.abs());
    if scale == 0.0 {
        return None;
    }
    let s = v / scale;
    Some(s / s.mag())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unit(n: [f32; 3]) -> bool {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        (len - 1.0).abs() < 1e-5
    }

    #[test]
    fn mask_sets_outside_bits() {
        let corners = [1.0, -1.0, 0.0, 2.0, -3.0, 0.5, -0.5, 4.0];
        assert_eq!(CornerMask::from_corners(&corners).0, 0b1010_1001);
    }

    #[test]
    fn zero_counts_as_inside() {
        let corners = [0.0; 8];
        let mask = CornerMask::from_corners(&corners);
        assert_eq!(mask.0, 0);
        assert!(mask.is_trivial());
    }

    #[test]
    fn inactive_cell_has_no_vertex() {
        assert!(process_cell(&[1.0; 8], [0, 0, 0]).is_none());
        assert!(process_cell(&[-1.0; 8], [0, 0, 0]).is_none());
    }

    #[test]
    fn single_negative_corner() {
        let mut corners = [1.0; 8];
        corners[0] = -1.0;
        let v = process_cell(&corners, [0, 0, 0]).unwrap();

        assert_eq!(v.mask.inside_bits(), 1);
        assert_eq!(v.crossing_count(), 3);
        // Каждое ребро пересекается посередине: (0.5,0,0), (0,0.5,0), (0,0,0.5)
        let expected = 0.5 + 0.5 / 3.0;
        for c in v.position {
            assert!((c - expected).abs() < 1e-6, "{:?}", v.position);
        }
        // Градиент направлен от внутреннего угла 0 наружу
        assert!(is_unit(v.normal));
        assert!(v.normal.iter().all(|c| *c > 0.0));
    }

    #[test]
    fn vertex_is_offset_by_cell_origin() {
        let corners = [-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0];
        let v = process_cell(&corners, [3, 4, 5]).unwrap();
        assert_eq!(v.crossing_count(), 4);
        assert!((v.position[0] - 4.0).abs() < 1e-6);
        assert!((v.position[1] - 5.0).abs() < 1e-6);
        assert!((v.position[2] - 6.0).abs() < 1e-6);
        assert_eq!(v.normal, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn crossing_parameter_interpolates() {
        assert_eq!(crossing_parameter(-1.0, 1.0), 0.5);
        assert_eq!(crossing_parameter(-1.0, 3.0), 0.25);
        assert_eq!(crossing_parameter(0.0, 2.0), 0.0);
    }

    #[test]
    fn crossing_parameter_handles_degenerate_edges() {
        assert_eq!(crossing_parameter(0.0, 0.0), 0.5);
        assert_eq!(crossing_parameter(f32::INFINITY, -1.0), 1.0);
        assert_eq!(crossing_parameter(-1.0, f32::INFINITY), 0.0);
        assert_eq!(crossing_parameter(f32::INFINITY, f32::NEG_INFINITY), 0.5);
        assert_eq!(crossing_parameter(f32::NAN, 1.0), 1.0);
    }

    #[test]
    fn infinite_samples_give_finite_vertex_and_unit_normal() {
        let mut corners = [f32::INFINITY; 8];
        corners[7] = -0.5;
        let v = process_cell(&corners, [0, 0, 0]).unwrap();
        assert!(v.position.iter().all(|c| c.is_finite()));
        assert!(is_unit(v.normal));
        // Внешние углы против угла 7 - нормаль смотрит в -x, -y, -z
        assert!(v.normal.iter().all(|c| *c < 0.0));
    }

    #[test]
    fn zero_gradient_falls_back_to_mask_normal() {
        // Углы 0 и 7 снаружи, но с одинаковыми значениями градиент = 0
        let corners = [1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0];
        let mask = CornerMask::from_corners(&corners);
        let n = estimate_normal(&corners, mask);
        assert!(is_unit([n.x, n.y, n.z]));
    }

    #[test]
    fn tiny_gradient_still_normalizes() {
        let mut corners = [1e-30; 8];
        corners[0] = -1e-30;
        let mask = CornerMask::from_corners(&corners);
        let n = estimate_normal(&corners, mask);
        assert!(is_unit([n.x, n.y, n.z]));
    }

    #[test]
    fn gather_reads_cube_corners() {
        let shape = GridShape::new(3, 3, 3);
        let samples: Vec<f32> = (0..27).map(|i| i as f32).collect();
        let corners = gather_corners(&samples, shape, [1, 1, 1]);
        assert_eq!(corners, [13.0, 14.0, 16.0, 17.0, 22.0, 23.0, 25.0, 26.0]);
    }
}
