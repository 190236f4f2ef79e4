//! Position resolver partition and exactness checks

use cabinetkit_core::Rect;
use cabinetkit_engine::{resolve, PositionToken};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_token_stays_inside_the_face(width in 0.01f64..10_000.0, height in 0.01f64..10_000.0) {
        for token in PositionToken::ALL {
            let rect = resolve(token, width, height);
            // Thirds may land one ulp past the far edge
            let face = Rect::new(0.0, 0.0, width * (1.0 + 1e-12), height * (1.0 + 1e-12));
            prop_assert!(face.contains_rect(&rect), "{} escapes the face: {:?}", token, rect);
            prop_assert!(rect.width > 0.0 && rect.height > 0.0);
        }
    }

    #[test]
    fn resolving_twice_is_bit_identical(width in 0.0f64..500.0, height in 0.0f64..500.0) {
        for token in PositionToken::ALL {
            prop_assert_eq!(resolve(token, width, height), resolve(token, width, height));
        }
    }
}

#[test]
fn test_thirds_are_exact() {
    let rect = resolve(PositionToken::LeftThird, 30.0, 10.0);
    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.x, 0.0);

    let rect = resolve(PositionToken::RightTwoThirds, 30.0, 10.0);
    assert_eq!(rect.width, 20.0);
    assert_eq!(rect.x, 10.0);

    let rect = resolve(PositionToken::MiddleVertThird, 12.0, 30.0);
    assert_eq!(rect.height, 10.0);
    assert_eq!(rect.y, 10.0);
}

#[test]
fn test_horizontal_tokens_keep_full_height() {
    for token in [
        PositionToken::LeftHalf,
        PositionToken::RightHalf,
        PositionToken::LeftThird,
        PositionToken::MiddleThird,
        PositionToken::RightThird,
        PositionToken::LeftTwoThirds,
        PositionToken::RightTwoThirds,
    ] {
        let rect = resolve(token, 36.0, 18.0);
        assert_eq!((rect.y, rect.height), (0.0, 18.0), "{}", token);
    }
}

#[test]
fn test_vertical_tokens_keep_full_width() {
    let expected = [
        (PositionToken::UpperHalf, 0.0, 9.0),
        (PositionToken::LowerHalf, 9.0, 9.0),
        (PositionToken::UpperThird, 0.0, 6.0),
        (PositionToken::MiddleVertThird, 6.0, 6.0),
        (PositionToken::LowerThird, 12.0, 6.0),
    ];
    for (token, y, height) in expected {
        let rect = resolve(token, 36.0, 18.0);
        assert_eq!((rect.x, rect.width), (0.0, 36.0), "{}", token);
        assert_eq!((rect.y, rect.height), (y, height), "{}", token);
    }
}

#[test]
fn test_right_third_starts_at_two_thirds() {
    let rect = resolve(PositionToken::RightThird, 30.0, 10.0);
    assert_eq!(rect.x, 20.0);
    assert_eq!(rect.width, 10.0);

    let rect = resolve(PositionToken::MiddleThird, 30.0, 10.0);
    assert_eq!(rect.x, 10.0);
}

#[test]
fn test_zero_face_is_degenerate_not_an_error() {
    for token in PositionToken::ALL {
        let rect = resolve(token, 0.0, 0.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
