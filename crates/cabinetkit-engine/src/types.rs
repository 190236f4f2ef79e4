//! Type definitions for the cabinet configuration snapshot

use crate::allowances::Allowances;
use crate::door::{Door, DoorType};
use crate::joinery::JoineryConfig;
use crate::position::PositionToken;
use cabinetkit_core::units::deserialize_length;
use cabinetkit_core::Dimensions;
use serde::{Deserialize, Serialize};

/// Everything the derivation engine reads, as one immutable value
///
/// Preconditions: lengths are finite and non-negative. Zero lengths are
/// allowed and give degenerate geometry; negative values are not guarded
/// and produce meaningless output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetParameters {
    pub dimensions: Dimensions,
    /// Shared by every panel
    #[serde(deserialize_with = "deserialize_length")]
    pub material_thickness: f64,
    pub shelf_count: u32,
    pub joinery: JoineryConfig,
    /// Emitted and drawn in this order
    pub doors: Vec<Door>,
    pub allowances: Allowances,
}

impl Default for CabinetParameters {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            material_thickness: 0.75,
            shelf_count: 2,
            joinery: JoineryConfig::default(),
            doors: vec![
                Door::new(PositionToken::LeftTwoThirds, DoorType::Mirror),
                Door::new(PositionToken::RightThird, DoorType::Solid),
            ],
            allowances: Allowances::default(),
        }
    }
}
