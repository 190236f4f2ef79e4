//! Schematic layout checks

use cabinetkit_core::{Dimensions, Rect};
use cabinetkit_engine::{
    shelf_positions, Baseline, CabinetMaker, CabinetParameters, Door, DoorType, JoineryConfig,
    Paint, PositionToken, Role, Schematic, SideJoint, PIXELS_PER_INCH,
};

fn sample_params() -> CabinetParameters {
    CabinetParameters {
        dimensions: Dimensions::new(24.0, 30.0, 12.0),
        material_thickness: 0.75,
        shelf_count: 2,
        doors: vec![
            Door::new(PositionToken::LeftHalf, DoorType::Solid),
            Door::new(PositionToken::RightHalf, DoorType::Mirror),
        ],
        ..CabinetParameters::default()
    }
}

#[test]
fn test_shelf_spacing_is_even() {
    assert_eq!(shelf_positions(120.0, 3), vec![30.0, 60.0, 90.0]);

    let positions = shelf_positions(97.0, 5);
    assert_eq!(positions.len(), 5);
    assert!(positions.iter().all(|y| *y > 0.0 && *y < 97.0));
    let gap = 97.0 / 6.0;
    for (k, y) in positions.iter().enumerate() {
        assert!((y - gap * (k as f64 + 1.0)).abs() < 1e-9);
    }
}

#[test]
fn test_front_view_frame_and_bands() {
    let schematic = Schematic::layout(&sample_params(), PIXELS_PER_INCH);
    let front = &schematic.front;
    assert_eq!((front.width, front.height), (96.0, 120.0));

    let frame = &front.shapes[0];
    assert_eq!(frame.rect, Rect::new(0.0, 0.0, 96.0, 120.0));
    assert_eq!(
        frame.paint,
        Paint::Outline {
            stroke_width: 3.0,
            dashed: false
        }
    );

    let bands: Vec<Rect> = front.shapes_with_role(Role::TopBottom).map(|s| s.rect).collect();
    assert_eq!(
        bands,
        vec![Rect::new(0.0, 0.0, 96.0, 3.0), Rect::new(0.0, 117.0, 96.0, 3.0)]
    );

    let sides: Vec<Rect> = front
        .shapes_with_role(Role::Sides)
        .filter(|s| matches!(s.paint, Paint::Fill { .. }))
        .map(|s| s.rect)
        .collect();
    assert_eq!(
        sides,
        vec![Rect::new(0.0, 0.0, 3.0, 120.0), Rect::new(93.0, 0.0, 3.0, 120.0)]
    );
}

#[test]
fn test_front_view_shelves_centered_on_positions() {
    let schematic = Schematic::layout(&sample_params(), PIXELS_PER_INCH);
    let shelves: Vec<Rect> = schematic
        .front
        .shapes_with_role(Role::Shelves)
        .map(|s| s.rect)
        .collect();
    assert_eq!(
        shelves,
        vec![
            Rect::new(3.0, 38.5, 90.0, 3.0),
            Rect::new(3.0, 78.5, 90.0, 3.0)
        ]
    );
}

#[test]
fn test_front_view_doors_are_dashed_outlines() {
    let schematic = Schematic::layout(&sample_params(), PIXELS_PER_INCH);
    let solid: Vec<_> = schematic.front.shapes_with_role(Role::SolidDoor).collect();
    let mirror: Vec<_> = schematic.front.shapes_with_role(Role::MirrorDoor).collect();
    assert_eq!(solid.len(), 1);
    assert_eq!(mirror.len(), 1);
    assert_eq!(solid[0].rect, Rect::new(0.0, 0.0, 48.0, 120.0));
    assert_eq!(mirror[0].rect, Rect::new(48.0, 0.0, 48.0, 120.0));
    assert!(matches!(solid[0].paint, Paint::Outline { dashed: true, .. }));
}

#[test]
fn test_front_view_dimension_labels() {
    let schematic = Schematic::layout(&sample_params(), PIXELS_PER_INCH);
    let labels = &schematic.front.labels;
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "24\"");
    assert_eq!((labels[0].x, labels[0].y), (48.0, -5.0));
    assert_eq!(labels[1].text, "30\"");
    assert_eq!(labels[1].rotation, -90.0);
}

#[test]
fn test_side_view_without_screwless_has_no_extensions() {
    let schematic = Schematic::layout(&sample_params(), PIXELS_PER_INCH);
    let side = &schematic.side;
    assert_eq!((side.width, side.height), (48.0, 120.0));
    assert_eq!(side.shapes_with_role(Role::JointExtension).count(), 0);
    assert_eq!(side.shapes_with_role(Role::Shelves).count(), 2);
    assert!(matches!(side.shapes[0].paint, Paint::FillOutline { .. }));
}

#[test]
fn test_side_view_screwless_extensions() {
    let params = CabinetParameters {
        joinery: JoineryConfig {
            side_joint: SideJoint::Screwless { depth: 0.5 },
            ..JoineryConfig::default()
        },
        ..sample_params()
    };
    let schematic = Schematic::layout(&params, PIXELS_PER_INCH);
    let bands: Vec<Rect> = schematic
        .side
        .shapes_with_role(Role::JointExtension)
        .map(|s| s.rect)
        .collect();
    assert_eq!(
        bands,
        vec![
            Rect::new(0.0, -1.5, 48.0, 1.5),
            Rect::new(0.0, 120.0, 48.0, 1.5)
        ]
    );

    let annotations: Vec<_> = schematic
        .side
        .labels
        .iter()
        .filter(|label| label.role == Role::JointExtension)
        .collect();
    assert_eq!(annotations.len(), 2);
    assert!(annotations.iter().all(|label| label.text == "+0.375\""));
}

#[test]
fn test_door_layout_labels_use_capitalized_type() {
    let params = CabinetParameters {
        doors: vec![
            Door::new(PositionToken::UpperThird, DoorType::Glass),
            Door::new(PositionToken::LowerHalf, DoorType::Mirror),
        ],
        ..sample_params()
    };
    let schematic = Schematic::layout(&params, PIXELS_PER_INCH);
    let layout = &schematic.door_layout;

    assert!(matches!(
        layout.shapes[0].paint,
        Paint::Outline { dashed: true, .. }
    ));
    let glass = layout.shapes_with_role(Role::GlassDoor).next().unwrap();
    assert_eq!(glass.rect, Rect::new(0.0, 0.0, 96.0, 40.0));
    assert!(matches!(
        glass.paint,
        Paint::FillOutline { opacity, .. } if opacity == 0.3
    ));

    let texts: Vec<&str> = layout.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Glass", "Mirror"]);
    assert_eq!((layout.labels[0].x, layout.labels[0].y), (48.0, 20.0));
    assert_eq!(layout.labels[0].baseline, Baseline::Middle);
}

#[test]
fn test_schematic_door_rects_match_cut_geometry_scaled() {
    let maker = CabinetMaker::new(sample_params());
    let schematic = maker.schematic();
    let inch_rects: Vec<Rect> = maker
        .door_geometries()
        .iter()
        .map(|g| g.rect.scaled(PIXELS_PER_INCH))
        .collect();
    let drawn: Vec<Rect> = schematic
        .door_layout
        .shapes
        .iter()
        .skip(1)
        .map(|s| s.rect)
        .collect();
    assert_eq!(drawn, inch_rects);
}

#[test]
fn test_layout_is_idempotent() {
    let maker = CabinetMaker::new(sample_params());
    assert_eq!(maker.schematic(), maker.schematic());
}
