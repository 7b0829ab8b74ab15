// ============================================
// Combinators - Композиция скалярных полей
// ============================================

use super::Field;

/// Сдвинуть поле на (dx, dy, dz)
pub fn translate<F>(dx: f32, dy: f32, dz: f32, field: F) -> impl Fn(f32, f32, f32) -> f32 + Send + Sync
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    move |x, y, z| field(x - dx, y - dy, z - dz)
}

/// Объединение полей (поточечный минимум)
///
/// Пустой набор даёт +inf, т.е. ничего не рисует.
pub fn merge<F>(fields: Vec<F>) -> impl Fn(f32, f32, f32) -> f32 + Send + Sync
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync,
{
    move |x, y, z| {
        fields
            .iter()
            .fold(f32::INFINITY, |acc, f| acc.min(f(x, y, z)))
    }
}

/// Упаковать поле в Box для разнородных наборов
pub fn boxed<F>(field: F) -> Field
where
    F: Fn(f32, f32, f32) -> f32 + Send + Sync + 'static,
{
    Box::new(field)
}
