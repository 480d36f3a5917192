use sculpt_codec::{
    DEFAULT_DIFFICULTY, DEFAULT_MAX_MOVES, DIFFICULTY_RANGE, MAX_MOVES_RANGE, ShapeMetadata,
};
use sculpt_shape::Adjacency;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_grid_size must be at least 1")]
    ZeroMinSize,
    #[error("min_grid_size {min} is larger than max_grid_size {max}")]
    InvertedRange { min: usize, max: usize },
    #[error("default_grid_size {size} is outside {min}..={max}")]
    DefaultOutOfRange { size: usize, min: usize, max: usize },
    #[error("default_difficulty {0} is outside {min}..={max}", min = DIFFICULTY_RANGE.start(), max = DIFFICULTY_RANGE.end())]
    DifficultyOutOfRange(i64),
    #[error("default_max_moves {0} is outside {min}..={max}", min = MAX_MOVES_RANGE.start(), max = MAX_MOVES_RANGE.end())]
    MaxMovesOutOfRange(i64),
}

/// Editing-surface settings. Every field is optional in the TOML file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub default_grid_size: usize,
    pub min_grid_size: usize,
    pub max_grid_size: usize,
    /// Rule used when validating before export.
    pub adjacency: Adjacency,
    pub default_difficulty: i64,
    pub default_max_moves: i64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_grid_size: 5,
            min_grid_size: 1,
            max_grid_size: 32,
            adjacency: Adjacency::Face,
            default_difficulty: DEFAULT_DIFFICULTY,
            default_max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: EditorConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_grid_size, self.max_grid_size);
        if min == 0 {
            return Err(ConfigError::ZeroMinSize);
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        if !self.size_allowed(self.default_grid_size) {
            return Err(ConfigError::DefaultOutOfRange {
                size: self.default_grid_size,
                min,
                max,
            });
        }
        // zero is allowed: encoding swaps it for the built-in default
        let d = self.default_difficulty;
        if d != 0 && !DIFFICULTY_RANGE.contains(&d) {
            return Err(ConfigError::DifficultyOutOfRange(d));
        }
        let m = self.default_max_moves;
        if m != 0 && !MAX_MOVES_RANGE.contains(&m) {
            return Err(ConfigError::MaxMovesOutOfRange(m));
        }
        Ok(())
    }

    #[inline]
    pub fn size_allowed(&self, size: usize) -> bool {
        (self.min_grid_size..=self.max_grid_size).contains(&size)
    }

    pub fn default_metadata(&self) -> ShapeMetadata {
        ShapeMetadata::new(self.default_difficulty, self.default_max_moves)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<EditorConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    EditorConfig::from_toml_str(&s)
}
