// ============================================
// Grid Header - Заголовок файла сетки
// ============================================

use serde::{Deserialize, Serialize};

use crate::error::SaveError;

/// Магическое число "SNET" в ASCII
pub const MAGIC_NUMBER: [u8; 4] = [0x53, 0x4E, 0x45, 0x54];

/// Версия формата файла сетки
pub const GRID_FILE_VERSION: u32 = 1;

/// Заголовок файла сетки (32 байта)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridHeader {
    /// Магическое число для валидации
    pub magic: [u8; 4],
    /// Версия формата
    pub version: u32,
    /// Размеры сетки
    pub width: u64,
    pub height: u64,
    pub depth: u64,
}

impl GridHeader {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            magic: MAGIC_NUMBER,
            version: GRID_FILE_VERSION,
            width: width as u64,
            height: height as u64,
            depth: depth as u64,
        }
    }

    /// Проверка magic и версии формата
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != MAGIC_NUMBER {
            return Err(SaveError::InvalidMagic);
        }
        if self.version != GRID_FILE_VERSION {
            return Err(SaveError::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Размеры в usize; не помещающиеся значения становятся usize::MAX
    pub fn dims(&self) -> [usize; 3] {
        [self.width, self.height, self.depth].map(|d| usize::try_from(d).unwrap_or(usize::MAX))
    }
}

impl Default for GridHeader {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_fixed_size() {
        let size = bincode::serialized_size(&GridHeader::new(16, 16, 16)).unwrap();
        assert_eq!(size, 32);
        assert_eq!(size, bincode::serialized_size(&GridHeader::default()).unwrap());
    }

    #[test]
    fn validate_checks_magic_then_version() {
        assert!(GridHeader::new(2, 3, 4).validate().is_ok());

        let mut header = GridHeader::new(2, 3, 4);
        header.version = 99;
        assert!(matches!(header.validate(), Err(SaveError::UnsupportedVersion(99))));

        header.magic = *b"XNET";
        assert!(matches!(header.validate(), Err(SaveError::InvalidMagic)));
    }

    #[test]
    fn dims_round_trip() {
        assert_eq!(GridHeader::new(2, 3, 4).dims(), [2, 3, 4]);
    }
}
