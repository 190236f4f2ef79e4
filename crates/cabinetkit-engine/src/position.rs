//! Door position tokens and the face partition they describe
//!
//! A token names exactly one horizontal span and one vertical span of the
//! cabinet face. Resolution is an exhaustive match over the closed
//! enumeration, so there is no fallback branch and no partial matching.

use cabinetkit_core::{ParseError, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a door sits on the cabinet face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionToken {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "left-half")]
    LeftHalf,
    #[serde(rename = "right-half")]
    RightHalf,
    #[serde(rename = "left-1/3")]
    LeftThird,
    #[serde(rename = "middle-1/3")]
    MiddleThird,
    #[serde(rename = "right-1/3")]
    RightThird,
    #[serde(rename = "left-2/3")]
    LeftTwoThirds,
    #[serde(rename = "right-2/3")]
    RightTwoThirds,
    #[serde(rename = "upper-half")]
    UpperHalf,
    #[serde(rename = "lower-half")]
    LowerHalf,
    #[serde(rename = "upper-1/3")]
    UpperThird,
    #[serde(rename = "middle-vert-1/3")]
    MiddleVertThird,
    #[serde(rename = "lower-1/3")]
    LowerThird,
}

/// Horizontal partition of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSpan {
    Full,
    LeftHalf,
    RightHalf,
    LeftThird,
    MiddleThird,
    RightThird,
    LeftTwoThirds,
    RightTwoThirds,
}

/// Vertical partition of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSpan {
    Full,
    UpperHalf,
    LowerHalf,
    UpperThird,
    MiddleThird,
    LowerThird,
}

impl HorizontalSpan {
    /// `(x, width)` of this span on a face `face_width` wide
    pub fn extent(self, face_width: f64) -> (f64, f64) {
        match self {
            Self::Full => (0.0, face_width),
            Self::LeftHalf => (0.0, face_width / 2.0),
            Self::RightHalf => (face_width / 2.0, face_width / 2.0),
            Self::LeftThird => (0.0, face_width / 3.0),
            Self::MiddleThird => (face_width / 3.0, face_width / 3.0),
            Self::RightThird => ((face_width * 2.0) / 3.0, face_width / 3.0),
            Self::LeftTwoThirds => (0.0, (face_width * 2.0) / 3.0),
            Self::RightTwoThirds => (face_width / 3.0, (face_width * 2.0) / 3.0),
        }
    }
}

impl VerticalSpan {
    /// `(y, height)` of this span on a face `face_height` tall
    pub fn extent(self, face_height: f64) -> (f64, f64) {
        match self {
            Self::Full => (0.0, face_height),
            Self::UpperHalf => (0.0, face_height / 2.0),
            Self::LowerHalf => (face_height / 2.0, face_height / 2.0),
            Self::UpperThird => (0.0, face_height / 3.0),
            Self::MiddleThird => (face_height / 3.0, face_height / 3.0),
            Self::LowerThird => ((face_height * 2.0) / 3.0, face_height / 3.0),
        }
    }
}

impl PositionToken {
    /// Every token, in the order a configurator lists them
    pub const ALL: [PositionToken; 13] = [
        Self::Full,
        Self::LeftHalf,
        Self::RightHalf,
        Self::LeftThird,
        Self::MiddleThird,
        Self::RightThird,
        Self::LeftTwoThirds,
        Self::RightTwoThirds,
        Self::UpperHalf,
        Self::LowerHalf,
        Self::UpperThird,
        Self::MiddleVertThird,
        Self::LowerThird,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
            Self::LeftThird => "left-1/3",
            Self::MiddleThird => "middle-1/3",
            Self::RightThird => "right-1/3",
            Self::LeftTwoThirds => "left-2/3",
            Self::RightTwoThirds => "right-2/3",
            Self::UpperHalf => "upper-half",
            Self::LowerHalf => "lower-half",
            Self::UpperThird => "upper-1/3",
            Self::MiddleVertThird => "middle-vert-1/3",
            Self::LowerThird => "lower-1/3",
        }
    }

    /// Split the token into its horizontal and vertical spans
    pub fn spans(&self) -> (HorizontalSpan, VerticalSpan) {
        use HorizontalSpan as H;
        use VerticalSpan as V;
        match self {
            Self::Full => (H::Full, V::Full),
            Self::LeftHalf => (H::LeftHalf, V::Full),
            Self::RightHalf => (H::RightHalf, V::Full),
            Self::LeftThird => (H::LeftThird, V::Full),
            Self::MiddleThird => (H::MiddleThird, V::Full),
            Self::RightThird => (H::RightThird, V::Full),
            Self::LeftTwoThirds => (H::LeftTwoThirds, V::Full),
            Self::RightTwoThirds => (H::RightTwoThirds, V::Full),
            Self::UpperHalf => (H::Full, V::UpperHalf),
            Self::LowerHalf => (H::Full, V::LowerHalf),
            Self::UpperThird => (H::Full, V::UpperThird),
            Self::MiddleVertThird => (H::Full, V::MiddleThird),
            Self::LowerThird => (H::Full, V::LowerThird),
        }
    }
}

impl fmt::Display for PositionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPosition {
                token: s.to_string(),
            })
    }
}

/// Resolve a token to its sub-rectangle of a `face_width` x `face_height` face
///
/// The result always lies within `[0, face_width] x [0, face_height]`.
/// Units are whatever the face is given in.
pub fn resolve(token: PositionToken, face_width: f64, face_height: f64) -> Rect {
    let (horizontal, vertical) = token.spans();
    let (x, width) = horizontal.extent(face_width);
    let (y, height) = vertical.extent(face_height);
    Rect::new(x, y, width, height)
}
