//! # CabinetKit Engine
//!
//! The dimension-derivation engine. Maps a cabinet configuration to panel cut
//! dimensions and to the scaled geometry of a schematic, using one set of
//! rules for both so the two outputs never disagree.
//!
//! ## Components
//!
//! - **Position Resolver**: door position token to a sub-rectangle of the face
//! - **Door Geometry**: absolute door rectangle plus its cutting blank
//! - **Joinery Rules**: length deltas and fabrication notes per joint choice
//! - **Cut List Builder**: ordered panels with quantity, width, length, notes
//! - **Schematic Layout**: front, side and door-layout primitives for a renderer
//!
//! Every function here is pure. Nothing validates input; see
//! [`CabinetParameters`] for the preconditions.

pub mod allowances;
pub mod cut_list;
pub mod door;
pub mod joinery;
pub mod maker;
pub mod position;
pub mod schematic;
pub mod types;

pub use allowances::Allowances;
pub use cut_list::{build_cut_list, CutPiece};
pub use door::{door_geometry, Door, DoorGeometry, DoorType};
pub use joinery::{
    joint_adjustment, BackPanelMount, JoineryConfig, JointAdjustment, ShelfMount, SideJoint,
};
pub use maker::CabinetMaker;
pub use position::{resolve, HorizontalSpan, PositionToken, VerticalSpan};
pub use schematic::{
    shelf_positions, Baseline, Label, Paint, Role, Schematic, Shape, View, ViewKind, LEGEND,
    PIXELS_PER_INCH,
};
pub use types::CabinetParameters;
