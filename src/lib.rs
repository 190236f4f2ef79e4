//! # CabinetKit
//!
//! Parametric cabinet designer. Derives a cut list and scaled schematics from
//! one cabinet configuration.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Shared geometry, unit helpers, errors
//! 2. **cabinetkit-engine** - Position resolver, door geometry, joinery, cut list, schematic layout
//! 3. **cabinetkit-settings** - Configuration file loading, validation, palette
//! 4. **cabinetkit** - Text and SVG adapters plus the command-line binary

pub mod cli;
pub mod svg;
pub mod table;

pub use cabinetkit_core::{
    format_fraction, format_length, parse_length, Dimensions, MeasurementSystem, ParseError, Rect,
    Size,
};

pub use cabinetkit_engine::{
    build_cut_list, door_geometry, joint_adjustment, resolve, shelf_positions, Allowances,
    BackPanelMount, CabinetMaker, CabinetParameters, CutPiece, Door, DoorGeometry, DoorType,
    JoineryConfig, JointAdjustment, PositionToken, Role, Schematic, ShelfMount, SideJoint, View,
    ViewKind, LEGEND, PIXELS_PER_INCH,
};

pub use cabinetkit_settings::{
    default_config_path, CabinetConfig, ConfigFormat, Palette, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG` on top of an INFO default. Output goes to stderr so
/// the table or SVG on stdout can be piped.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
