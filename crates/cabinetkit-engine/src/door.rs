//! Door geometry calculator

use crate::allowances::Allowances;
use crate::position::{resolve, PositionToken};
use cabinetkit_core::{ParseError, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Door panel style. Only display color and labels depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorType {
    Solid,
    Mirror,
    Glass,
}

impl DoorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Mirror => "mirror",
            Self::Glass => "glass",
        }
    }

    /// Capitalized name used in piece names and door labels
    pub fn label(&self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Mirror => "Mirror",
            Self::Glass => "Glass",
        }
    }
}

impl fmt::Display for DoorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoorType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "mirror" => Ok(Self::Mirror),
            "glass" => Ok(Self::Glass),
            _ => Err(ParseError::UnknownDoorType {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub position: PositionToken,
    #[serde(rename = "type")]
    pub door_type: DoorType,
}

impl Door {
    pub fn new(position: PositionToken, door_type: DoorType) -> Self {
        Self {
            position,
            door_type,
        }
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new(PositionToken::Full, DoorType::Solid)
    }
}

impl FromStr for Door {
    type Err = ParseError;

    /// Parse `position[:type]`, e.g. `left-2/3:mirror`. The type defaults to solid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((position, door_type)) => Ok(Self::new(position.parse()?, door_type.parse()?)),
            None => Ok(Self::new(s.parse()?, DoorType::Solid)),
        }
    }
}

/// A door's on-face rectangle and its cutting blank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorGeometry {
    /// Position on the face, no allowance applied
    pub rect: Rect,
    /// `rect` grown by the overlay allowance on both axes
    pub blank_size: Size,
}

/// Locate a door on a face and size its blank
///
/// Unit-agnostic: pass the face in inches for cutting or pre-scaled to pixels
/// for drawing. The overlay allowance is added to the blank only, in inches,
/// so pixel-space callers should read `rect` alone.
pub fn door_geometry(
    door: &Door,
    face_width: f64,
    face_height: f64,
    allowances: &Allowances,
) -> DoorGeometry {
    let rect = resolve(door.position, face_width, face_height);
    DoorGeometry {
        rect,
        blank_size: rect.size().inflate(allowances.door_overlay),
    }
}
