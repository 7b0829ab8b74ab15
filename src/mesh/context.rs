// ============================================
// Meshing Context - Переиспользуемые буферы извлечения
// ============================================
//
// IndexMap выделяется один раз и между вызовами только сбрасывается.
// Выходной меш отдаётся вызывающему через take_mesh(), взамен
// создаётся новый с ёмкостью прошлого результата.
// Контекст принадлежит вызывающему, поэтому разные контексты можно
// использовать из разных потоков одновременно. Для пула rayon у
// каждого потока свой контекст в thread-local.

use std::cell::RefCell;

use super::index_map::IndexMap;
use super::surface_mesh::SurfaceMesh;

/// Начальная ёмкость под вершины
const VERTEX_CAPACITY: usize = 2048;
/// Начальная ёмкость под индексы
const INDEX_CAPACITY: usize = 16384;

/// Контекст извлечения поверхности
#[derive(Debug)]
pub struct MeshingContext {
    /// Ячейка -> индекс вершины (только на время одного вызова)
    pub index_map: IndexMap,
    /// Выходной меш
    pub mesh: SurfaceMesh,
}

impl MeshingContext {
    /// Создаёт контекст с преаллоцированными буферами
    pub fn new() -> Self {
        Self {
            index_map: IndexMap::new(),
            mesh: SurfaceMesh::with_capacity(VERTEX_CAPACITY, INDEX_CAPACITY),
        }
    }

    /// Очищает выходной меш перед новым извлечением
    #[inline]
    pub fn clear_output(&mut self) {
        self.mesh.clear();
    }

    /// Забирает результат; на его место встаёт меш той же ёмкости
    ///
    /// Это одно выделение на вызов. Кому нужен ноль выделений,
    /// читает `ctx.mesh` напрямую после `extract_surface_into`.
    pub fn take_mesh(&mut self) -> SurfaceMesh {
        let vertices = self.mesh.positions.capacity().max(VERTEX_CAPACITY);
        let indices = self.mesh.indices.capacity().max(INDEX_CAPACITY);
        std::mem::replace(&mut self.mesh, SurfaceMesh::with_capacity(vertices, indices))
    }
}

impl Default for MeshingContext {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static LOCAL_CONTEXT: RefCell<MeshingContext> = RefCell::new(MeshingContext::new());
}

/// Выполнить `f` с контекстом текущего потока
///
/// Повторный вход из `f` в этом же потоке паникует (RefCell).
#[inline]
pub fn with_meshing_context<F, R>(f: F) -> R
where
    F: FnOnce(&mut MeshingContext) -> R,
{
    LOCAL_CONTEXT.with(|ctx| f(&mut ctx.borrow_mut()))
}
