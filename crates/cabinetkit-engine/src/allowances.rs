//! Stock allowances applied during derivation
//!
//! Collected in one record so a shop can tune them without touching the
//! rules that consume them.

use cabinetkit_core::units::deserialize_length;
use serde::{Deserialize, Serialize};

/// Default overlay added to each door rect for the door blank
pub const DEFAULT_DOOR_OVERLAY: f64 = 0.5;
/// Default extra stock added to each door blank in the cut list
pub const DEFAULT_DOOR_STOCK: f64 = 1.0;
/// Default front-face setback subtracted from shelf width
pub const DEFAULT_SHELF_SETBACK: f64 = 0.75;
/// Default clearance subtracted from adjustable shelf length for pin hardware
pub const DEFAULT_SHELF_PIN_CLEARANCE: f64 = 0.125;

/// Allowance constants, all in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowances {
    /// Added to both axes of the door rect to give the door blank
    #[serde(deserialize_with = "deserialize_length")]
    pub door_overlay: f64,
    /// Added to both axes of the door blank to give the cut piece
    #[serde(deserialize_with = "deserialize_length")]
    pub door_stock: f64,
    /// Subtracted from shelf width, independent of material thickness
    #[serde(deserialize_with = "deserialize_length")]
    pub shelf_setback: f64,
    /// Subtracted from shelf length when shelves sit on pins
    #[serde(deserialize_with = "deserialize_length")]
    pub shelf_pin_clearance: f64,
}

impl Default for Allowances {
    fn default() -> Self {
        Self {
            door_overlay: DEFAULT_DOOR_OVERLAY,
            door_stock: DEFAULT_DOOR_STOCK,
            shelf_setback: DEFAULT_SHELF_SETBACK,
            shelf_pin_clearance: DEFAULT_SHELF_PIN_CLEARANCE,
        }
    }
}
