//! Catalog record types.

use serde::{Deserialize, Serialize};

/// The five named stats every archetype carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    /// Physical power.
    pub strength: u8,
    /// Speed and reflexes.
    pub agility: u8,
    /// Reasoning and arcane aptitude.
    pub intelligence: u8,
    /// Perception and willpower.
    pub wisdom: u8,
    /// Force of personality.
    pub charisma: u8,
}

/// Visual theme tag used by the rendering host to style an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Red,
    Blue,
    Purple,
    Green,
    Gold,
    Teal,
    Orange,
    Pink,
    Emerald,
    Indigo,
    Amber,
}

/// One selectable visual rendition of an archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceOption {
    /// Identifier, unique within the owning archetype.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Opaque reference to the artwork for this appearance.
    pub image_ref: String,
}

/// A predefined character archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    /// Identifier, unique within the catalog.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Class label (e.g. "Warrior").
    pub class_label: String,
    /// Flavor description.
    pub description: String,
    /// Fixed stat block.
    pub attributes: AttributeBlock,
    /// Visual theme tag.
    pub theme: ThemeColor,
    /// Short glyph shown beside the archetype.
    pub icon: String,
    /// Ordered appearance options, at least one.
    pub appearances: Vec<AppearanceOption>,
}

impl Archetype {
    /// Looks up an appearance option belonging to this archetype.
    #[must_use]
    pub fn appearance(&self, appearance_id: &str) -> Option<&AppearanceOption> {
        self.appearances.iter().find(|a| a.id == appearance_id)
    }
}
