// ============================================
// Worker Module - Фоновое извлечение поверхности
// ============================================
//
// Интерактивный поток рисует в SharedGrid и отправляет снимки,
// фоновый поток строит меш и возвращает его через канал.

mod types;
mod manager;

pub use types::MeshResult;
pub use manager::MeshWorker;
