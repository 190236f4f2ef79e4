//! Color palette keyed by schematic role
//!
//! Field names are the palette keys and must match `Role::key()`.

use cabinetkit_engine::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub top_bottom: String,
    pub sides: String,
    pub shelves: String,
    pub back: String,
    pub solid_door: String,
    pub mirror_door: String,
    pub glass_door: String,
    pub dimensions: String,
    pub joint_extension: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            top_bottom: "#A0522D".to_string(),
            sides: "#DEB887".to_string(),
            shelves: "#CD853F".to_string(),
            back: "#D2B48C".to_string(),
            solid_door: "#8B4513".to_string(),
            mirror_door: "#88CCE7".to_string(),
            glass_door: "#AAD7D9".to_string(),
            dimensions: "#666666".to_string(),
            joint_extension: "#3182CE".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, role: Role) -> &str {
        match role {
            Role::TopBottom => &self.top_bottom,
            Role::Sides => &self.sides,
            Role::Shelves => &self.shelves,
            Role::Back => &self.back,
            Role::SolidDoor => &self.solid_door,
            Role::MirrorDoor => &self.mirror_door,
            Role::GlassDoor => &self.glass_door,
            Role::Dimensions => &self.dimensions,
            Role::JointExtension => &self.joint_extension,
        }
    }

    /// Iterate `(role, color)` for every role
    pub fn entries(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL.into_iter().map(move |role| (role, self.color(role)))
    }
}
