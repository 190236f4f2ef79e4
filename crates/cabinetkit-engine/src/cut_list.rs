//! Cut list builder
//!
//! Emits pieces in a fixed order: Top, Bottom, Left Side, Right Side,
//! Back Panel, Shelf, then one row per door in input order. Values keep full
//! precision; rounding belongs to whoever displays them.

use crate::door::{door_geometry, Door, DoorType};
use crate::joinery::{joint_adjustment, JointAdjustment};
use crate::types::CabinetParameters;
use cabinetkit_core::format_fraction;
use serde::Serialize;
use tracing::{debug, trace};

/// One row of the cut list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutPiece {
    pub name: String,
    pub qty: u32,
    pub width: f64,
    pub length: f64,
    pub notes: String,
}

impl CutPiece {
    fn new(name: impl Into<String>, qty: u32, width: f64, length: f64, notes: String) -> Self {
        Self {
            name: name.into(),
            qty,
            width,
            length,
            notes,
        }
    }
}

/// Build the cut list for a cabinet
///
/// The Shelf row is always present; its quantity is the shelf count and may
/// be zero.
pub fn build_cut_list(params: &CabinetParameters) -> Vec<CutPiece> {
    let dims = &params.dimensions;
    let t = params.material_thickness;
    let adj = joint_adjustment(&params.joinery, t, &params.allowances);

    debug!(
        width = dims.width,
        height = dims.height,
        depth = dims.depth,
        thickness = t,
        shelves = params.shelf_count,
        doors = params.doors.len(),
        "building cut list"
    );

    let mut pieces = Vec::with_capacity(6 + params.doors.len());
    pieces.extend(carcass_pieces(params, &adj));
    pieces.extend(params.doors.iter().map(|door| door_piece(params, door)));

    for piece in &pieces {
        trace!(
            name = %piece.name,
            qty = piece.qty,
            width = piece.width,
            length = piece.length,
            "cut piece"
        );
    }

    pieces
}

fn carcass_pieces(params: &CabinetParameters, adj: &JointAdjustment) -> [CutPiece; 6] {
    let dims = &params.dimensions;
    let t = params.material_thickness;
    let side_length = (dims.height - 2.0 * t) + adj.side_length_delta;
    let side_notes = |side: &str| {
        format!(
            "{} side ({}\") - {} - {}",
            side, t, adj.side_note, adj.back_seat_note
        )
    };

    [
        CutPiece::new(
            "Top",
            1,
            dims.width,
            dims.depth,
            format!("Main cabinet top ({}\") - {}", t, adj.construction_note),
        ),
        CutPiece::new(
            "Bottom",
            1,
            dims.width,
            dims.depth,
            format!("Main cabinet bottom ({}\") - {}", t, adj.construction_note),
        ),
        CutPiece::new("Left Side", 1, dims.depth, side_length, side_notes("Left")),
        CutPiece::new("Right Side", 1, dims.depth, side_length, side_notes("Right")),
        CutPiece::new(
            "Back Panel",
            1,
            dims.width - adj.back_delta,
            dims.height - adj.back_delta,
            format!("Back panel - {}", adj.back_note),
        ),
        CutPiece::new(
            "Shelf",
            params.shelf_count,
            dims.depth - t - params.allowances.shelf_setback,
            dims.width - t - adj.shelf_width_delta,
            format!("{}\" shelves - {}", t, adj.shelf_note),
        ),
    ]
}

fn door_piece(params: &CabinetParameters, door: &Door) -> CutPiece {
    let dims = &params.dimensions;
    let allowances = &params.allowances;
    let geometry = door_geometry(door, dims.width, dims.height, allowances);
    let overlay = format_fraction(allowances.door_overlay);

    let notes = match door.door_type {
        DoorType::Mirror => format!(
            "{}\" door with mirror - {}\" overlay",
            params.material_thickness, overlay
        ),
        DoorType::Solid | DoorType::Glass => {
            format!("{}\" door - {}\" overlay", params.material_thickness, overlay)
        }
    };

    CutPiece::new(
        format!("{} Door ({})", door.door_type.label(), door.position),
        1,
        geometry.blank_size.width + allowances.door_stock,
        geometry.blank_size.height + allowances.door_stock,
        notes,
    )
}
