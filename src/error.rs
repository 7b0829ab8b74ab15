// ============================================
// Errors - Ошибки сетки, сцены и сохранения
// ============================================
//
// Извлечение поверхности тотально и ошибок не возвращает.
// Ошибки возникают только при создании сетки, загрузке сцены
// и чтении/записи файла сетки.

use std::fmt;

/// Ошибки создания воксельной сетки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Одна из размерностей меньше 1
    InvalidDimension { width: usize, height: usize, depth: usize },
    /// Число сэмплов не помещается в память
    TooLarge { width: usize, height: usize, depth: usize },
    /// Длина буфера сэмплов не совпадает с width * height * depth
    SampleCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { width, height, depth } => {
                write!(f, "invalid grid dimension {}x{}x{}", width, height, depth)
            }
            GridError::TooLarge { width, height, depth } => {
                write!(f, "grid {}x{}x{} is too large", width, height, depth)
            }
            GridError::SampleCountMismatch { expected, actual } => {
                write!(f, "sample count mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Ошибки загрузки сцены из JSON
#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Parse(String),
    Grid(GridError),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<GridError> for SceneError {
    fn from(e: GridError) -> Self {
        SceneError::Grid(e)
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "failed to read scene: {}", e),
            SceneError::Parse(e) => write!(f, "failed to parse scene: {}", e),
            SceneError::Grid(e) => write!(f, "invalid scene grid: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Grid(e) => Some(e),
            SceneError::Parse(_) => None,
        }
    }
}

/// Ошибки сохранения/загрузки файла сетки
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Serialize(String),
    Deserialize(String),
    InvalidMagic,
    UnsupportedVersion(u32),
    Compression(String),
    Grid(GridError),
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<GridError> for SaveError {
    fn from(e: GridError) -> Self {
        SaveError::Grid(e)
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "io error: {}", e),
            SaveError::Serialize(e) => write!(f, "serialize error: {}", e),
            SaveError::Deserialize(e) => write!(f, "deserialize error: {}", e),
            SaveError::InvalidMagic => write!(f, "invalid magic number"),
            SaveError::UnsupportedVersion(v) => write!(f, "unsupported version {}", v),
            SaveError::Compression(e) => write!(f, "compression error: {}", e),
            SaveError::Grid(e) => write!(f, "invalid grid: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Grid(e) => Some(e),
            _ => None,
        }
    }
}
