// ============================================
// Field Module - Неявные поверхности (SDF)
// ============================================
//
// Поле - чистая функция (x, y, z) -> f32.
// Отрицательные значения внутри, положительные снаружи.

mod primitives;
mod combinators;
mod scene;

pub use primitives::{sphere, torus};
pub use combinators::{boxed, merge, translate};
pub use scene::{FieldDesc, SceneConfig};

/// Поле, собранное во время выполнения
pub type Field = Box<dyn Fn(f32, f32, f32) -> f32 + Send + Sync>;
