//! Cut list ordering and dimension checks

use cabinetkit_core::Dimensions;
use cabinetkit_engine::{
    build_cut_list, Allowances, BackPanelMount, CabinetMaker, CabinetParameters, CutPiece, Door,
    DoorType, JoineryConfig, PositionToken, ShelfMount, SideJoint,
};

fn end_to_end_params() -> CabinetParameters {
    CabinetParameters {
        dimensions: Dimensions::new(24.0, 30.0, 12.0),
        material_thickness: 0.75,
        shelf_count: 2,
        joinery: JoineryConfig {
            side_joint: SideJoint::Screwed,
            shelves: ShelfMount::Adjustable,
            back_panel: BackPanelMount::Rabbeted,
        },
        doors: vec![
            Door::new(PositionToken::LeftTwoThirds, DoorType::Solid),
            Door::new(PositionToken::RightThird, DoorType::Solid),
        ],
        allowances: Allowances::default(),
    }
}

fn find<'a>(pieces: &'a [CutPiece], name: &str) -> &'a CutPiece {
    pieces
        .iter()
        .find(|piece| piece.name == name)
        .unwrap_or_else(|| panic!("missing piece {}", name))
}

#[test]
fn test_fixed_emission_order() {
    let mut params = end_to_end_params();
    params.doors = vec![
        Door::new(PositionToken::UpperHalf, DoorType::Glass),
        Door::new(PositionToken::Full, DoorType::Mirror),
        Door::new(PositionToken::LowerThird, DoorType::Solid),
    ];
    let names: Vec<String> = build_cut_list(&params)
        .into_iter()
        .map(|piece| piece.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Top",
            "Bottom",
            "Left Side",
            "Right Side",
            "Back Panel",
            "Shelf",
            "Glass Door (upper-half)",
            "Mirror Door (full)",
            "Solid Door (lower-1/3)",
        ]
    );
}

#[test]
fn test_end_to_end_scenario() {
    let pieces = build_cut_list(&end_to_end_params());

    let back = find(&pieces, "Back Panel");
    assert_eq!(back.width, 22.5);
    assert_eq!(back.length, 28.5);
    assert_eq!(back.notes, "Back panel - fits in rabbet");

    let shelf = find(&pieces, "Shelf");
    assert_eq!(shelf.qty, 2);
    assert_eq!(shelf.length, 23.125);
    assert_eq!(shelf.width, 10.5);
    assert_eq!(shelf.notes, "0.75\" shelves - for shelf pins");

    let door = find(&pieces, "Solid Door (left-2/3)");
    assert_eq!(door.width, 17.5);
    assert_eq!(door.length, 31.5);
    assert_eq!(door.qty, 1);

    let door = find(&pieces, "Solid Door (right-1/3)");
    assert_eq!(door.width, 9.5);
    assert_eq!(door.length, 31.5);
}

#[test]
fn test_screwed_side_length_is_inset_only() {
    let pieces = build_cut_list(&end_to_end_params());
    for name in ["Left Side", "Right Side"] {
        let side = find(&pieces, name);
        assert_eq!(side.width, 12.0);
        assert_eq!(side.length, 30.0 - 2.0 * 0.75);
    }
    assert_eq!(
        find(&pieces, "Left Side").notes,
        "Left side (0.75\") - cut to fit, pre-drill for screws and glue - with back panel rabbet"
    );
}

#[test]
fn test_screwless_side_length_is_extended() {
    let mut params = end_to_end_params();
    params.joinery.side_joint = SideJoint::Screwless { depth: 0.5 };
    let pieces = build_cut_list(&params);
    let side = find(&pieces, "Right Side");
    assert_eq!(side.length, 30.0 - 0.75);
    assert!(side.notes.contains("extend 0.375\" at each end"));
    assert!(find(&pieces, "Top").notes.ends_with("cut joint extensions on ends"));
}

#[test]
fn test_inset_back_and_fixed_shelves_take_no_deltas() {
    let mut params = end_to_end_params();
    params.joinery.back_panel = BackPanelMount::Inset;
    params.joinery.shelves = ShelfMount::Fixed;
    let pieces = build_cut_list(&params);

    let back = find(&pieces, "Back Panel");
    assert_eq!((back.width, back.length), (24.0, 30.0));
    assert_eq!(find(&pieces, "Shelf").length, 23.25);
}

#[test]
fn test_custom_allowances_flow_through() {
    let mut params = end_to_end_params();
    params.allowances = Allowances {
        door_overlay: 1.0,
        door_stock: 0.0,
        shelf_setback: 0.5,
        shelf_pin_clearance: 0.25,
    };
    let pieces = build_cut_list(&params);

    let door = find(&pieces, "Solid Door (left-2/3)");
    assert_eq!((door.width, door.length), (17.0, 31.0));
    // 16 x 30 face rect, overlay onto the blank, then stock onto the piece
    let allowances = &params.allowances;
    assert_eq!(door.width, 16.0 + allowances.door_overlay + allowances.door_stock);
    assert_eq!(door.length, 30.0 + allowances.door_overlay + allowances.door_stock);
    assert_eq!(door.notes, "0.75\" door - 1\" overlay");

    let shelf = find(&pieces, "Shelf");
    assert_eq!(shelf.width, 10.75);
    assert_eq!(shelf.length, 23.0);
}

#[test]
fn test_values_keep_full_precision() {
    let mut params = end_to_end_params();
    params.dimensions = Dimensions::new(25.0, 30.0, 12.0);
    params.doors = vec![Door::new(PositionToken::LeftThird, DoorType::Solid)];
    let pieces = build_cut_list(&params);
    let door = find(&pieces, "Solid Door (left-1/3)");
    assert_eq!(door.width, 25.0 / 3.0 + 0.5 + 1.0);
    assert_ne!(door.width, 9.83);
}

#[test]
fn test_cut_list_is_idempotent() {
    let maker = CabinetMaker::new(end_to_end_params());
    assert_eq!(maker.cut_list(), maker.cut_list());
}
