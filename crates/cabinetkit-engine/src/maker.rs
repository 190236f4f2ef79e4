//! Cabinet Maker
//!
//! Front door to the engine: holds one configuration snapshot and derives
//! the cut list and schematic from it on demand. Results are recomputed on
//! every call and are identical for identical input.

use crate::cut_list::{build_cut_list, CutPiece};
use crate::door::{door_geometry, DoorGeometry};
use crate::joinery::{joint_adjustment, JointAdjustment};
use crate::schematic::{Schematic, PIXELS_PER_INCH};
use crate::types::CabinetParameters;

#[derive(Debug, Clone)]
pub struct CabinetMaker {
    params: CabinetParameters,
}

impl CabinetMaker {
    pub fn new(params: CabinetParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CabinetParameters {
        &self.params
    }

    pub fn joint_adjustment(&self) -> JointAdjustment {
        joint_adjustment(
            &self.params.joinery,
            self.params.material_thickness,
            &self.params.allowances,
        )
    }

    /// Door geometry in inches, one per door in input order
    pub fn door_geometries(&self) -> Vec<DoorGeometry> {
        let dims = &self.params.dimensions;
        self.params
            .doors
            .iter()
            .map(|door| door_geometry(door, dims.width, dims.height, &self.params.allowances))
            .collect()
    }

    pub fn cut_list(&self) -> Vec<CutPiece> {
        build_cut_list(&self.params)
    }

    /// Schematic at the default scale of [`PIXELS_PER_INCH`]
    pub fn schematic(&self) -> Schematic {
        self.schematic_at(PIXELS_PER_INCH)
    }

    pub fn schematic_at(&self, scale: f64) -> Schematic {
        Schematic::layout(&self.params, scale)
    }
}

impl From<CabinetParameters> for CabinetMaker {
    fn from(params: CabinetParameters) -> Self {
        Self::new(params)
    }
}
