// ============================================
// Scene - Data-Driven описание сцены из JSON
// ============================================
//
// Пример:
// {
//   "width": 16,
//   "fields": [
//     { "type": "translate", "offset": [8, 8, 8],
//       "field": { "type": "sphere", "radius": 4 } }
//   ]
// }
//
// height/depth по умолчанию равны width.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::grid::VoxelGrid;
use super::{boxed, merge, sphere, torus, translate, Field};

/// Описание скалярного поля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldDesc {
    Sphere {
        radius: f32,
    },
    Torus {
        major_radius: f32,
        minor_radius: f32,
    },
    Translate {
        offset: [f32; 3],
        field: Box<FieldDesc>,
    },
    Merge {
        fields: Vec<FieldDesc>,
    },
}

impl FieldDesc {
    /// Собрать функцию поля из описания
    pub fn build(&self) -> Field {
        match self {
            FieldDesc::Sphere { radius } => boxed(sphere(*radius)),
            FieldDesc::Torus { major_radius, minor_radius } => {
                boxed(torus(*major_radius, *minor_radius))
            }
            FieldDesc::Translate { offset, field } => {
                let [dx, dy, dz] = *offset;
                boxed(translate(dx, dy, dz, field.build()))
            }
            FieldDesc::Merge { fields } => {
                boxed(merge(fields.iter().map(FieldDesc::build).collect()))
            }
        }
    }
}

/// Сцена: размеры сетки и набор полей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: usize,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub depth: Option<usize>,
    #[serde(default)]
    pub fields: Vec<FieldDesc>,
}

impl SceneConfig {
    /// Загрузить сцену из JSON строки
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Загрузить сцену из файла
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            log::warn!("Failed to load scene {}: {}", path.display(), e);
            e
        })
    }

    /// Сериализовать обратно в JSON
    pub fn to_json(&self) -> Result<String, SceneError> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Размеры сетки (height/depth по умолчанию = width)
    pub fn dims(&self) -> [usize; 3] {
        [
            self.width,
            self.height.unwrap_or(self.width),
            self.depth.unwrap_or(self.width),
        ]
    }

    /// Создать сетку и нарисовать в неё все поля по порядку
    pub fn build_grid(&self) -> Result<VoxelGrid, SceneError> {
        let [width, height, depth] = self.dims();
        let mut grid = VoxelGrid::new(width, height, depth)?;
        for desc in &self.fields {
            grid.paint(desc.build());
        }
        log::debug!(
            "scene built: {}x{}x{} grid, {} fields",
            width, height, depth, self.fields.len()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "width": 16,
        "fields": [
            { "type": "translate", "offset": [8, 8, 8],
              "field": { "type": "merge", "fields": [
                  { "type": "torus", "major_radius": 4, "minor_radius": 1 },
                  { "type": "sphere", "radius": 4 }
              ] } }
        ]
    }"#;

    #[test]
    fn parses_nested_fields() {
        let scene = SceneConfig::from_json(SCENE).unwrap();
        assert_eq!(scene.dims(), [16, 16, 16]);
        assert_eq!(scene.fields.len(), 1);
        match &scene.fields[0] {
            FieldDesc::Translate { offset, field } => {
                assert_eq!(*offset, [8.0, 8.0, 8.0]);
                assert!(matches!(**field, FieldDesc::Merge { .. }));
            }
            other => panic!("unexpected field {:?}", other),
        }
    }

    #[test]
    fn built_field_matches_description() {
        let desc = FieldDesc::Translate {
            offset: [1.0, 0.0, 0.0],
            field: Box::new(FieldDesc::Sphere { radius: 2.0 }),
        };
        let f = desc.build();
        assert_eq!(f(1.0, 0.0, 0.0), -2.0);
        assert_eq!(f(3.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn build_grid_paints_fields() {
        let scene = SceneConfig::from_json(SCENE).unwrap();
        let grid = scene.build_grid().unwrap();
        assert_eq!(grid.dims(), [16, 16, 16]);
        assert!(grid.get(8, 8, 8).unwrap() < 0.0);
        assert!(grid.get(0, 0, 0).unwrap() > 0.0);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = SceneConfig::from_json("{ \"width\": }").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn zero_width_is_grid_error() {
        let scene = SceneConfig { width: 0, height: None, depth: None, fields: vec![] };
        assert!(matches!(scene.build_grid(), Err(SceneError::Grid(_))));
    }

    #[test]
    fn json_roundtrip_keeps_scene() {
        let scene = SceneConfig::from_json(SCENE).unwrap();
        let json = scene.to_json().unwrap();
        assert_eq!(SceneConfig::from_json(&json).unwrap(), scene);
    }
}
