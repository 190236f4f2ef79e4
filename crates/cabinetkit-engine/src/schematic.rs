//! Schematic layout engine
//!
//! Produces scaled rectangles and labels for three views of the cabinet:
//! front, side, and door layout. Nothing here draws; a renderer consumes the
//! primitives and looks up colors by [`Role`].
//!
//! Coordinates are pixels with the origin at the top-left of the cabinet
//! outline. Joint-extension bands and dimension labels may sit at negative
//! coordinates, so renderers should leave a margin.

use crate::door::{door_geometry, DoorType};
use crate::types::CabinetParameters;
use cabinetkit_core::{format_length, MeasurementSystem, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pixels drawn per inch of cabinet
pub const PIXELS_PER_INCH: f64 = 4.0;

/// Gap between a dimension label and the edge it measures, in pixels
const LABEL_OFFSET: f64 = 5.0;

/// Stroke width for door outlines, in pixels
const DOOR_STROKE: f64 = 1.0;

/// Fill opacity of colored door rectangles
const DOOR_FILL_OPACITY: f64 = 0.3;

/// Fill opacity of the side-view back tint
const BACK_FILL_OPACITY: f64 = 0.2;

/// Semantic role of a primitive. Palette keys match the serde names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    TopBottom,
    Sides,
    Shelves,
    Back,
    SolidDoor,
    MirrorDoor,
    GlassDoor,
    Dimensions,
    JointExtension,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Self::TopBottom,
        Self::Sides,
        Self::Shelves,
        Self::Back,
        Self::SolidDoor,
        Self::MirrorDoor,
        Self::GlassDoor,
        Self::Dimensions,
        Self::JointExtension,
    ];

    /// Palette key
    pub fn key(&self) -> &'static str {
        match self {
            Self::TopBottom => "top_bottom",
            Self::Sides => "sides",
            Self::Shelves => "shelves",
            Self::Back => "back",
            Self::SolidDoor => "solid_door",
            Self::MirrorDoor => "mirror_door",
            Self::GlassDoor => "glass_door",
            Self::Dimensions => "dimensions",
            Self::JointExtension => "joint_extension",
        }
    }

    pub fn for_door(door_type: DoorType) -> Self {
        match door_type {
            DoorType::Solid => Self::SolidDoor,
            DoorType::Mirror => Self::MirrorDoor,
            DoorType::Glass => Self::GlassDoor,
        }
    }
}

/// Legend entries in display order
pub const LEGEND: [(Role, &str); 6] = [
    (Role::TopBottom, "Top/Bottom"),
    (Role::Sides, "Sides"),
    (Role::Shelves, "Shelves"),
    (Role::SolidDoor, "Solid Door"),
    (Role::MirrorDoor, "Mirror Door"),
    (Role::GlassDoor, "Glass Door"),
];

/// How a rectangle is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill { opacity: f64 },
    Outline { stroke_width: f64, dashed: bool },
    FillOutline { opacity: f64, stroke_width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub role: Role,
    pub paint: Paint,
}

impl Shape {
    fn fill(rect: Rect, role: Role) -> Self {
        Self {
            rect,
            role,
            paint: Paint::Fill { opacity: 1.0 },
        }
    }

    fn outline(rect: Rect, role: Role, stroke_width: f64, dashed: bool) -> Self {
        Self {
            rect,
            role,
            paint: Paint::Outline {
                stroke_width,
                dashed,
            },
        }
    }
}

/// Vertical alignment of a label relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
}

/// Text centered horizontally on `(x, y)`, rotated about that point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub role: Role,
    /// Degrees, clockwise
    pub rotation: f64,
    pub baseline: Baseline,
}

impl Label {
    fn new(x: f64, y: f64, text: impl Into<String>, role: Role) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            role,
            rotation: 0.0,
            baseline: Baseline::Alphabetic,
        }
    }

    fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    fn centered(mut self) -> Self {
        self.baseline = Baseline::Middle;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Front,
    Side,
    DoorLayout,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Front => "Front View",
            Self::Side => "Side View",
            Self::DoorLayout => "Door Layout",
        }
    }
}

/// One view's primitives, drawn in order
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    /// Outline width in pixels
    pub width: f64,
    /// Outline height in pixels
    pub height: f64,
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl View {
    fn new(kind: ViewKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Shapes with the given role, in draw order
    pub fn shapes_with_role(&self, role: Role) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |shape| shape.role == role)
    }
}

/// All three views of a cabinet
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    pub scale: f64,
    pub front: View,
    pub side: View,
    pub door_layout: View,
}

impl Schematic {
    pub fn layout(params: &CabinetParameters, scale: f64) -> Self {
        debug!(
            scale,
            shelves = params.shelf_count,
            doors = params.doors.len(),
            "laying out schematic"
        );
        Self {
            scale,
            front: front_view(params, scale),
            side: side_view(params, scale),
            door_layout: door_layout_view(params, scale),
        }
    }

    pub fn views(&self) -> [&View; 3] {
        [&self.front, &self.side, &self.door_layout]
    }
}

/// Evenly spaced shelf centre lines: `k * height / (count + 1)` for `k = 1..=count`
///
/// Gaps above the first shelf, between shelves and below the last are equal.
pub fn shelf_positions(height: f64, shelf_count: u32) -> Vec<f64> {
    let divisions = f64::from(shelf_count) + 1.0;
    (1..=shelf_count)
        .map(|k| f64::from(k) * height / divisions)
        .collect()
}

fn dimension_label(value_in: f64) -> String {
    format_length(value_in, MeasurementSystem::Imperial)
}

/// Front elevation: frame, top/bottom and side bands, shelves, dashed doors
pub fn front_view(params: &CabinetParameters, scale: f64) -> View {
    let dims = &params.dimensions;
    let width = dims.width * scale;
    let height = dims.height * scale;
    let t = params.material_thickness * scale;
    let mut view = View::new(ViewKind::Front, width, height);

    view.shapes.push(Shape::outline(
        Rect::new(0.0, 0.0, width, height),
        Role::Sides,
        t,
        false,
    ));
    view.shapes.push(Shape::fill(Rect::new(0.0, 0.0, width, t), Role::TopBottom));
    view.shapes.push(Shape::fill(Rect::new(0.0, height - t, width, t), Role::TopBottom));
    view.shapes.push(Shape::fill(Rect::new(0.0, 0.0, t, height), Role::Sides));
    view.shapes.push(Shape::fill(Rect::new(width - t, 0.0, t, height), Role::Sides));

    for y in shelf_positions(height, params.shelf_count) {
        view.shapes.push(Shape::fill(
            Rect::new(t, y - t / 2.0, width - t * 2.0, t),
            Role::Shelves,
        ));
    }

    for door in &params.doors {
        let geometry = door_geometry(door, width, height, &params.allowances);
        view.shapes.push(Shape::outline(
            geometry.rect,
            Role::for_door(door.door_type),
            DOOR_STROKE,
            true,
        ));
    }

    view.labels.push(Label::new(
        width / 2.0,
        -LABEL_OFFSET,
        dimension_label(dims.width),
        Role::Dimensions,
    ));
    view.labels.push(
        Label::new(-LABEL_OFFSET, height / 2.0, dimension_label(dims.height), Role::Dimensions)
            .rotated(-90.0),
    );

    view
}

/// Side elevation: tinted frame, shelves, and screwless joint extensions
pub fn side_view(params: &CabinetParameters, scale: f64) -> View {
    let dims = &params.dimensions;
    let depth = dims.depth * scale;
    let height = dims.height * scale;
    let t = params.material_thickness * scale;
    let mut view = View::new(ViewKind::Side, depth, height);

    view.shapes.push(Shape {
        rect: Rect::new(0.0, 0.0, depth, height),
        role: Role::Back,
        paint: Paint::FillOutline {
            opacity: BACK_FILL_OPACITY,
            stroke_width: t,
        },
    });

    for y in shelf_positions(height, params.shelf_count) {
        view.shapes.push(Shape::fill(Rect::new(0.0, y - t / 2.0, depth, t), Role::Shelves));
    }

    let mut top_label_y = -LABEL_OFFSET;
    if params.joinery.side_joint.is_screwless() {
        let per_end_in = params
            .joinery
            .side_joint
            .extension_per_end(params.material_thickness);
        let extension = per_end_in * scale;
        let text = format!("+{:.3}\"", per_end_in);

        view.shapes.push(Shape::fill(
            Rect::new(0.0, -extension, depth, extension),
            Role::JointExtension,
        ));
        view.shapes.push(Shape::fill(
            Rect::new(0.0, height, depth, extension),
            Role::JointExtension,
        ));
        view.labels.push(
            Label::new(depth + LABEL_OFFSET, -extension / 2.0, text.clone(), Role::JointExtension)
                .centered(),
        );
        view.labels.push(
            Label::new(depth + LABEL_OFFSET, height + extension / 2.0, text, Role::JointExtension)
                .centered(),
        );
        top_label_y -= extension;
    }

    view.labels.push(Label::new(
        depth / 2.0,
        top_label_y,
        dimension_label(dims.depth),
        Role::Dimensions,
    ));
    view.labels.push(
        Label::new(-LABEL_OFFSET, height / 2.0, dimension_label(dims.height), Role::Dimensions)
            .rotated(-90.0),
    );

    view
}

/// Door layout: dashed outline with filled, labelled door rectangles
pub fn door_layout_view(params: &CabinetParameters, scale: f64) -> View {
    let dims = &params.dimensions;
    let width = dims.width * scale;
    let height = dims.height * scale;
    let mut view = View::new(ViewKind::DoorLayout, width, height);

    view.shapes.push(Shape::outline(
        Rect::new(0.0, 0.0, width, height),
        Role::Dimensions,
        1.0,
        true,
    ));

    for door in &params.doors {
        let rect = door_geometry(door, width, height, &params.allowances).rect;
        view.shapes.push(Shape {
            rect,
            role: Role::for_door(door.door_type),
            paint: Paint::FillOutline {
                opacity: DOOR_FILL_OPACITY,
                stroke_width: DOOR_STROKE,
            },
        });
        let (cx, cy) = rect.center();
        view.labels
            .push(Label::new(cx, cy, door.door_type.label(), Role::Dimensions).centered());
    }

    view
}
