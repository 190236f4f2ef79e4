//! Cabinet configuration source
//!
//! Loads a cabinet configuration snapshot from TOML or JSON, validates it at
//! the boundary, and hands immutable values to the engine. Editing helpers
//! return a new configuration instead of mutating in place.
//!
//! ```toml
//! units = "imperial"
//!
//! [cabinet]
//! material_thickness = "3/4"
//! shelf_count = 2
//!
//! [cabinet.dimensions]
//! width = 24
//! height = 30
//! depth = 12
//!
//! [cabinet.joinery]
//! side_joint = { type = "screwless", depth = 0.5 }
//! shelves = "adjustable"
//! back_panel = "rabbeted"
//!
//! [[cabinet.doors]]
//! position = "left-2/3"
//! type = "mirror"
//! ```

use crate::error::{SettingsError, SettingsResult};
use crate::palette::Palette;
use cabinetkit_core::MeasurementSystem;
use cabinetkit_engine::{CabinetMaker, CabinetParameters, Door, SideJoint};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application directory name under the platform config dir
pub const APP_DIR: &str = "cabinetkit";

/// Default configuration file name
pub const CONFIG_FILE: &str = "cabinet.toml";

/// On-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete configuration snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetConfig {
    /// Display units for the cut list
    pub units: MeasurementSystem,
    pub cabinet: CabinetParameters,
    pub palette: Palette,
}

/// `<platform config dir>/cabinetkit/cabinet.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}

impl CabinetConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text in the given format and validate it
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            doors = config.cabinet.doors.len(),
            "loaded cabinet config"
        );
        Ok(config)
    }

    /// Serialize to text in the given format
    pub fn to_string_in(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = self.to_string_in(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Check every length and fraction the engine relies on
    ///
    /// Non-finite and negative lengths are rejected. Zero lengths are
    /// accepted with a warning since they only give degenerate geometry.
    pub fn validate(&self) -> SettingsResult<()> {
        let cabinet = &self.cabinet;
        let dims = &cabinet.dimensions;

        let lengths = [
            ("cabinet.dimensions.width", dims.width),
            ("cabinet.dimensions.height", dims.height),
            ("cabinet.dimensions.depth", dims.depth),
            ("cabinet.material_thickness", cabinet.material_thickness),
            ("cabinet.allowances.door_overlay", cabinet.allowances.door_overlay),
            ("cabinet.allowances.door_stock", cabinet.allowances.door_stock),
            ("cabinet.allowances.shelf_setback", cabinet.allowances.shelf_setback),
            (
                "cabinet.allowances.shelf_pin_clearance",
                cabinet.allowances.shelf_pin_clearance,
            ),
        ];

        for (key, value) in lengths {
            if !value.is_finite() {
                return Err(SettingsError::invalid(key, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(SettingsError::invalid(
                    key,
                    format!("must not be negative (got {})", value),
                ));
            }
        }

        if let SideJoint::Screwless { depth } = cabinet.joinery.side_joint {
            if !(0.0..=1.0).contains(&depth) {
                return Err(SettingsError::invalid(
                    "cabinet.joinery.side_joint.depth",
                    format!("must be a fraction between 0 and 1 (got {})", depth),
                ));
            }
        }

        if dims.width == 0.0 || dims.height == 0.0 || dims.depth == 0.0 {
            warn!(
                width = dims.width,
                height = dims.height,
                depth = dims.depth,
                "zero cabinet dimension, geometry will be degenerate"
            );
        }

        if 2.0 * cabinet.material_thickness > dims.height {
            warn!(
                thickness = cabinet.material_thickness,
                height = dims.height,
                "top and bottom are thicker than the cabinet is tall"
            );
        }

        Ok(())
    }

    /// Engine view of this configuration
    pub fn maker(&self) -> CabinetMaker {
        CabinetMaker::new(self.cabinet.clone())
    }

    /// Copy with `door` appended
    pub fn with_door(&self, door: Door) -> Self {
        let mut next = self.clone();
        next.cabinet.doors.push(door);
        next
    }

    /// Copy with the door at `index` removed; out-of-range leaves doors unchanged
    pub fn without_door(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.cabinet.doors.len() {
            next.cabinet.doors.remove(index);
        }
        next
    }

    /// Copy with the door at `index` replaced
    pub fn with_door_at(&self, index: usize, door: Door) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.cabinet.doors.get_mut(index) {
            *slot = door;
        }
        next
    }

    pub fn with_shelf_count(&self, shelf_count: u32) -> Self {
        let mut next = self.clone();
        next.cabinet.shelf_count = shelf_count;
        next
    }

    pub fn with_units(&self, units: MeasurementSystem) -> Self {
        let mut next = self.clone();
        next.units = units;
        next
    }
}
