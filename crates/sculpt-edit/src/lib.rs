//! Editing session for a single voxel shape.
#![forbid(unsafe_code)]

pub mod config;
pub mod editor;

pub use config::{ConfigError, EditorConfig, load_config_from_path};
pub use editor::{EditError, EditorStats, ImportReport, ShapeEditor};
