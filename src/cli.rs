//! Command-line interface

use crate::{svg, table};
use anyhow::Context;
use cabinetkit_core::MeasurementSystem;
use cabinetkit_engine::Door;
use cabinetkit_settings::{default_config_path, CabinetConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "cabinetkit")]
#[command(version)]
#[command(about = "Derive a cut list and schematics from a cabinet configuration")]
pub struct Cli {
    /// Configuration file (.toml or .json); defaults to the user config file if present
    pub config: Option<PathBuf>,

    /// Print SVG for the selected view instead of the cut list
    #[arg(long, value_enum, value_name = "VIEW")]
    pub svg: Option<ViewSelection>,

    /// Show cut list lengths in millimetres
    #[arg(long)]
    pub metric: bool,

    /// Append a door, e.g. `left-2/3:mirror` (repeatable)
    #[arg(long = "door", value_name = "POSITION[:TYPE]")]
    pub doors: Vec<Door>,

    /// Override the shelf count
    #[arg(long, value_name = "N")]
    pub shelves: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewSelection {
    Front,
    Side,
    Doors,
    All,
}

impl Cli {
    /// Load the configuration and apply command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<CabinetConfig> {
        let base = match &self.config {
            Some(path) => CabinetConfig::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => match default_config_path() {
                Ok(path) if path.exists() => {
                    info!(path = %path.display(), "using user configuration");
                    CabinetConfig::load_from_file(&path)
                        .with_context(|| format!("loading {}", path.display()))?
                }
                _ => {
                    debug!("no configuration file, using defaults");
                    CabinetConfig::default()
                }
            },
        };

        let mut config = self
            .doors
            .iter()
            .fold(base, |config, door| config.with_door(*door));
        if let Some(shelves) = self.shelves {
            config = config.with_shelf_count(shelves);
        }
        if self.metric {
            config = config.with_units(MeasurementSystem::Metric);
        }
        Ok(config)
    }
}

/// Produce the text the binary prints to stdout
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.resolve_config()?;
    let maker = config.maker();

    let output = match cli.svg {
        None => table::render_cut_list(&maker.cut_list(), config.units),
        Some(selection) => {
            let schematic = maker.schematic();
            match selection {
                ViewSelection::Front => svg::render_view(&schematic.front, &config.palette),
                ViewSelection::Side => svg::render_view(&schematic.side, &config.palette),
                ViewSelection::Doors => {
                    svg::render_view(&schematic.door_layout, &config.palette)
                }
                ViewSelection::All => svg::render_schematic(&schematic, &config.palette),
            }
        }
    };
    Ok(output)
}
