//! CabinetKit Settings Crate
//!
//! Handles the cabinet configuration file, its validation, and the color
//! palette used by renderers.

pub mod config;
pub mod error;
pub mod palette;

pub use config::{default_config_path, CabinetConfig, ConfigFormat};
pub use error::{SettingsError, SettingsResult};
pub use palette::Palette;
