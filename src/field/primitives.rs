// ============================================
// Primitives - Базовые SDF примитивы
// ============================================
//
// Все примитивы центрированы в начале координат.
// Для размещения в сетке используется translate().

use ultraviolet::{Vec2, Vec3};

/// Сфера радиуса `radius`
pub fn sphere(radius: f32) -> impl Fn(f32, f32, f32) -> f32 + Copy + Send + Sync {
    move |x, y, z| Vec3::new(x, y, z).mag() - radius
}

/// Тор в плоскости XZ
///
/// `major` - радиус окружности центра трубки, `minor` - радиус трубки.
pub fn torus(major: f32, minor: f32) -> impl Fn(f32, f32, f32) -> f32 + Copy + Send + Sync {
    move |x, y, z| {
        let q = Vec2::new(Vec2::new(x, z).mag() - major, y);
        q.mag() - minor
    }
}
