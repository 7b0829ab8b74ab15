// ============================================
// Save System - Снимки сетки на диске
// ============================================
// Формат .snet с заголовком и ZSTD сжатием

mod header;
mod grid_file;

pub use header::{GridHeader, GRID_FILE_VERSION, MAGIC_NUMBER};
pub use grid_file::GridFile;
