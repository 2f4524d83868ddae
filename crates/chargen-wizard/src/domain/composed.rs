//! The composed character — the wizard's single terminal output.

use chargen_catalog::{AppearanceOption, Archetype, AttributeBlock, ThemeColor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully assembled character: the chosen archetype's data, the chosen
/// appearance, and the final trimmed custom name.
///
/// Built only through [`ComposedCharacter::from_parts`]; the fields are
/// copied explicitly so future catalog schema additions (notably the
/// archetype's appearance list) never leak into the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedCharacter {
    /// Catalog id of the source archetype.
    pub archetype_id: String,
    /// The archetype's display name.
    pub display_name: String,
    /// The archetype's class label.
    pub class_label: String,
    /// The archetype's flavor description.
    pub description: String,
    /// The archetype's fixed stat block.
    pub attributes: AttributeBlock,
    /// The archetype's visual theme tag.
    pub theme: ThemeColor,
    /// The archetype's glyph.
    pub icon: String,
    /// The chosen appearance.
    pub appearance: AppearanceOption,
    /// The final custom name, trimmed.
    pub custom_name: String,
    /// When the character was composed.
    pub composed_at: DateTime<Utc>,
}

impl ComposedCharacter {
    /// Assembles a character from its validated parts.
    ///
    /// The name is trimmed here; callers pass the raw buffer as the user
    /// left it.
    #[must_use]
    pub fn from_parts(
        archetype: &Archetype,
        appearance: &AppearanceOption,
        custom_name: &str,
        composed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            archetype_id: archetype.id.clone(),
            display_name: archetype.display_name.clone(),
            class_label: archetype.class_label.clone(),
            description: archetype.description.clone(),
            attributes: archetype.attributes,
            theme: archetype.theme,
            icon: archetype.icon.clone(),
            appearance: appearance.clone(),
            custom_name: custom_name.trim().to_owned(),
            composed_at,
        }
    }
}
