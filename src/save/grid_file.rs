// ============================================
// Grid File - Чтение/запись снимка сетки
// ============================================
//
// Формат:
// - заголовок GridHeader (bincode, несжатый, фиксированный размер)
// - тело GridBody (bincode + ZSTD)
//
// Бесконечности (пустое пространство) сжимаются ZSTD почти в ноль.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::grid::VoxelGrid;

use super::header::GridHeader;

/// Уровень сжатия ZSTD
const COMPRESSION_LEVEL: i32 = 3;

/// Тело файла (сжимается ZSTD)
#[derive(Debug, Serialize, Deserialize)]
struct GridBody {
    samples: Vec<f32>,
}

/// Интерфейс для работы с файлом сетки
pub struct GridFile;

impl GridFile {
    /// Сохранить сетку в файл
    pub fn save(path: impl AsRef<Path>, grid: &VoxelGrid) -> Result<(), SaveError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::save_to(&mut writer, grid)?;
        writer.flush()?;
        Ok(())
    }

    /// Загрузить сетку из файла
    pub fn load(path: impl AsRef<Path>) -> Result<VoxelGrid, SaveError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::load_from(&mut reader)
    }

    /// Записать сетку в поток
    pub fn save_to<W: Write>(writer: &mut W, grid: &VoxelGrid) -> Result<(), SaveError> {
        // 1. Заголовок
        let [width, height, depth] = grid.dims();
        let header = GridHeader::new(width, height, depth);
        let header_bytes = bincode::serialize(&header)
            .map_err(|e| SaveError::Serialize(e.to_string()))?;
        writer.write_all(&header_bytes)?;

        // 2. Тело: сериализуем и сжимаем
        let body = GridBody { samples: grid.samples().to_vec() };
        let body_bytes = bincode::serialize(&body)
            .map_err(|e| SaveError::Serialize(e.to_string()))?;
        let compressed = zstd::encode_all(&body_bytes[..], COMPRESSION_LEVEL)
            .map_err(|e| SaveError::Compression(e.to_string()))?;
        writer.write_all(&compressed)?;

        log::debug!(
            "grid {}x{}x{} saved: {} bytes raw, {} compressed",
            width, height, depth, body_bytes.len(), compressed.len()
        );
        Ok(())
    }

    /// Прочитать сетку из потока (до конца потока)
    pub fn load_from<R: Read>(reader: &mut R) -> Result<VoxelGrid, SaveError> {
        // 1. Читаем заголовок
        let header_size = bincode::serialized_size(&GridHeader::default()).unwrap_or(32) as usize;
        let mut header_bytes = vec![0u8; header_size];
        reader.read_exact(&mut header_bytes)?;

        let header: GridHeader = bincode::deserialize(&header_bytes)
            .map_err(|e| SaveError::Deserialize(e.to_string()))?;

        header.validate()?;
        // Размеры проверяем до распаковки тела
        let [width, height, depth] = header.dims();
        VoxelGrid::check_dims(width, height, depth)?;

        // 2. Читаем и распаковываем тело
        let mut compressed = Vec::new();
        reader.read_to_end(&mut compressed)?;

        let body_bytes = zstd::decode_all(&compressed[..])
            .map_err(|e| SaveError::Compression(e.to_string()))?;

        let body: GridBody = bincode::deserialize(&body_bytes)
            .map_err(|e| SaveError::Deserialize(e.to_string()))?;

        // 3. Собираем сетку (проверяет размеры и длину)
        let grid = VoxelGrid::from_samples(width, height, depth, body.samples)?;
        Ok(grid)
    }
}
