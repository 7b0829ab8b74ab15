// ============================================
// Surface Nets - Извлечение поверхности из сетки
// ============================================
//
// Один детерминированный проход по ячейкам в порядке x -> y -> z:
// CellProcessor даёт вершину активной ячейки, Tessellator сразу
// сшивает её с уже обработанными соседями.
//
// Сложность: O(число ячеек), память: O(размер меша + число ячеек)

use rayon::prelude::*;

use crate::grid::VoxelGrid;
use super::cell::{gather_corners, process_cell};
use super::context::{with_meshing_context, MeshingContext};
use super::surface_mesh::SurfaceMesh;
use super::tessellate::{stitch_cell, triangulate, Stitch};

/// Статистика одного извлечения
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Ячейки, получившие вершину
    pub active_cells: usize,
    /// Построенные квады (по 2 треугольника)
    pub quads: usize,
    /// Квады, пропущенные из-за отсутствующего соседа
    pub skipped_quads: usize,
}

/// Извлечь поверхность уровня 0 из сетки
///
/// Чистая функция: повторный вызов на неизменной сетке даёт
/// побитово тот же результат.
pub fn extract_surface(grid: &VoxelGrid) -> SurfaceMesh {
    let mut ctx = MeshingContext::new();
    extract_surface_into(grid, &mut ctx);
    ctx.take_mesh()
}

/// Извлечь поверхность в буферы контекста
///
/// Результат лежит в `ctx.mesh`; прежнее содержимое стирается.
pub fn extract_surface_into(grid: &VoxelGrid, ctx: &mut MeshingContext) -> ExtractionStats {
    let mut stats = ExtractionStats::default();
    let shape = grid.shape();
    let cells = shape.cells();

    ctx.clear_output();
    ctx.index_map.reset(cells);

    if cells.width == 0 || cells.height == 0 || cells.depth == 0 {
        log::debug!(
            "degenerate grid {}x{}x{}: empty mesh",
            shape.width, shape.height, shape.depth
        );
        return stats;
    }

    let samples = grid.samples();
    let MeshingContext { index_map, mesh } = ctx;

    for z in 0..cells.depth {
        for y in 0..cells.height {
            for x in 0..cells.width {
                let cell = [x, y, z];
                let corners = gather_corners(samples, shape, cell);

                let Some(vertex) = process_cell(&corners, cell) else {
                    continue;
                };

                let index = mesh.push_vertex(vertex.position, vertex.normal);
                index_map.insert(cell, index);
                stats.active_cells += 1;

                for stitch in stitch_cell(index_map, cell, vertex.edges) {
                    match stitch {
                        Stitch::Quad(quad) => {
                            let tri = triangulate(&mesh.positions, quad, vertex.mask.is_outside(0));
                            mesh.indices.extend_from_slice(&tri);
                            stats.quads += 1;
                        }
                        Stitch::MissingNeighbor => stats.skipped_quads += 1,
                        Stitch::NoCrossing => {}
                    }
                }
            }
        }
    }

    log::debug!(
        "surface nets {}x{}x{}: {} active cells, {} quads ({} skipped), {} triangles",
        shape.width,
        shape.height,
        shape.depth,
        stats.active_cells,
        stats.quads,
        stats.skipped_quads,
        mesh.triangle_count()
    );

    stats
}

/// Извлечь поверхности нескольких независимых сеток параллельно
///
/// Порядок результатов совпадает с порядком входа.
pub fn extract_batch(grids: &[&VoxelGrid]) -> Vec<SurfaceMesh> {
    if grids.is_empty() {
        return Vec::new();
    }

    grids
        .par_iter()
        .map(|grid| {
            with_meshing_context(|ctx| {
                extract_surface_into(grid, ctx);
                ctx.take_mesh()
            })
        })
        .collect()
}
