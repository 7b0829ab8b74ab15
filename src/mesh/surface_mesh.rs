// ============================================
// Surface Mesh - Выходные буферы меша
// ============================================
//
// Раздельные массивы позиций, нормалей и индексов - в таком виде
// их принимает рендерер. Индексы - тройки треугольников.

use super::vertex::MeshVertex;

/// Треугольный меш поверхности
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Очистить буферы, сохраняя capacity
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// Добавить вершину, вернуть её индекс
    #[inline]
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Треугольники как тройки индексов
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Интерлейсный буфер вершин для загрузки на GPU
    pub fn to_vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| MeshVertex::new(*p, *n))
            .collect()
    }

    /// Позиции как байты (без копирования)
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Нормали как байты (без копирования)
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Индексы как байты (без копирования)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Сдвинуть все вершины (например, центрировать сетку: -dims / 2)
    pub fn translate(&mut self, offset: [f32; 3]) {
        for p in &mut self.positions {
            p[0] += offset[0];
            p[1] += offset[1];
            p[2] += offset[2];
        }
    }

    /// AABB вершин (min, max); None для пустого меша
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_mesh() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new();
        let n = [0.0, 0.0, 1.0];
        mesh.push_vertex([0.0, 0.0, 0.0], n);
        mesh.push_vertex([1.0, 0.0, 0.0], n);
        mesh.push_vertex([0.0, 1.0, 0.0], n);
        mesh.push_vertex([1.0, 1.0, 2.0], n);
        mesh.indices.extend_from_slice(&[0, 1, 3, 0, 3, 2]);
        mesh
    }

    #[test]
    fn counts_and_triangles() {
        let mesh = quad_mesh();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 3], [0, 3, 2]]);
    }

    #[test]
    fn byte_views_match_lengths() {
        let mesh = quad_mesh();
        assert_eq!(mesh.position_bytes().len(), 4 * 12);
        assert_eq!(mesh.normal_bytes().len(), 4 * 12);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(mesh.to_vertices()[3].position, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn bounds_and_translate() {
        let mut mesh = quad_mesh();
        assert_eq!(mesh.bounds(), Some(([0.0, 0.0, 0.0], [1.0, 1.0, 2.0])));
        mesh.translate([-0.5, -0.5, -1.0]);
        assert_eq!(mesh.bounds(), Some(([-0.5, -0.5, -1.0], [0.5, 0.5, 1.0])));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = SurfaceMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), None);
    }
}
