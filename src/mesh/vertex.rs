// ============================================
// Mesh Vertex - Вершина для GPU буфера
// ============================================

use bytemuck::{Pod, Zeroable};

/// Интерлейсная вершина (позиция + нормаль), 24 байта
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    #[inline]
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
        let v = MeshVertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
    }
}
