//! Joinery rules
//!
//! Maps a joinery selection to the length deltas it imposes on panels and
//! the fabrication notes that go with them. [`joint_adjustment`] is the single
//! source for both: the cut list never recomputes a delta or rewrites a note.

use crate::allowances::Allowances;
use serde::{Deserialize, Serialize};

/// How the side panels are joined to the top and bottom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SideJoint {
    /// Butt joint, screwed and glued
    Screwed,
    /// Mechanically engaged joint needing extra length at each end
    Screwless {
        /// Engagement depth as a fraction of material thickness, in `[0, 1]`
        depth: f64,
    },
}

impl SideJoint {
    /// Extra length needed at one end of a side panel
    pub fn extension_per_end(&self, material_thickness: f64) -> f64 {
        match self {
            Self::Screwed => 0.0,
            Self::Screwless { depth } => material_thickness * depth,
        }
    }

    pub fn is_screwless(&self) -> bool {
        matches!(self, Self::Screwless { .. })
    }
}

impl Default for SideJoint {
    fn default() -> Self {
        Self::Screwed
    }
}

/// How shelves are carried by the sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelfMount {
    /// Seated in dados
    Fixed,
    /// Resting on shelf pins
    Adjustable,
}

impl Default for ShelfMount {
    fn default() -> Self {
        Self::Fixed
    }
}

/// How the back panel is seated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackPanelMount {
    /// Seated in a rabbet along the back edges
    Rabbeted,
    /// Seated in a dado set in from the back edges
    Inset,
}

impl Default for BackPanelMount {
    fn default() -> Self {
        Self::Rabbeted
    }
}

/// Complete joinery selection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JoineryConfig {
    pub side_joint: SideJoint,
    pub shelves: ShelfMount,
    pub back_panel: BackPanelMount,
}

/// Deltas and notes derived from a [`JoineryConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct JointAdjustment {
    /// Added to side panel length (both ends combined)
    pub side_length_delta: f64,
    pub side_note: String,
    /// Subtracted from back panel width and length
    pub back_delta: f64,
    /// Note for the back panel itself
    pub back_note: String,
    /// Note for the sides about how the back seats into them
    pub back_seat_note: String,
    /// Subtracted from shelf length
    pub shelf_width_delta: f64,
    pub shelf_note: String,
    /// Note for the top and bottom panels
    pub construction_note: String,
}

/// Derive panel deltas and fabrication notes for a joinery selection
pub fn joint_adjustment(
    joinery: &JoineryConfig,
    material_thickness: f64,
    allowances: &Allowances,
) -> JointAdjustment {
    let per_end = joinery.side_joint.extension_per_end(material_thickness);

    let (side_length_delta, side_note, construction_note) = match joinery.side_joint {
        SideJoint::Screwed => (
            0.0,
            "cut to fit, pre-drill for screws and glue".to_string(),
            "pre-drill for screws".to_string(),
        ),
        SideJoint::Screwless { depth } => (
            material_thickness * depth * 2.0,
            format!("extend {:.3}\" at each end for screwless joint", per_end),
            "cut joint extensions on ends".to_string(),
        ),
    };

    let (back_delta, back_note, back_seat_note) = match joinery.back_panel {
        BackPanelMount::Rabbeted => (
            material_thickness * 2.0,
            "fits in rabbet",
            "with back panel rabbet",
        ),
        BackPanelMount::Inset => (0.0, "fits in dado", "with back panel dado"),
    };

    let (shelf_width_delta, shelf_note) = match joinery.shelves {
        ShelfMount::Fixed => (0.0, "for dado joint"),
        ShelfMount::Adjustable => (allowances.shelf_pin_clearance, "for shelf pins"),
    };

    JointAdjustment {
        side_length_delta,
        side_note,
        back_delta,
        back_note: back_note.to_string(),
        back_seat_note: back_seat_note.to_string(),
        shelf_width_delta,
        shelf_note: shelf_note.to_string(),
        construction_note,
    }
}
