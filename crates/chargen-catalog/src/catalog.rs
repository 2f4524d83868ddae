//! The immutable archetype catalog.

use std::collections::HashSet;

use chargen_core::naming::{NameVerdict, classify_name, fits_name_cap};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::Archetype;

/// Raw document shape as authored in YAML.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    archetypes: Vec<Archetype>,
    name_pool: Vec<String>,
}

/// The full content set: archetypes plus the default-name pool.
///
/// Constructed once via [`ArchetypeCatalog::from_yaml`] (or
/// [`ArchetypeCatalog::builtin`] for the embedded default content) and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    archetypes: Vec<Archetype>,
    name_pool: Vec<String>,
}

/// The content set shipped with the engine.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

impl ArchetypeCatalog {
    /// Parses and validates a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document cannot be parsed or fails
    /// any integrity check: at least one archetype, unique archetype ids,
    /// per-archetype non-empty appearance lists with unique ids, and a
    /// non-empty name pool whose every entry passes the name rule.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(source)?;
        let catalog = Self {
            archetypes: document.archetypes,
            name_pool: document.name_pool,
        };
        catalog.validate()?;
        tracing::debug!(
            archetypes = catalog.archetypes.len(),
            pool_names = catalog.name_pool.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the content set embedded in the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document is invalid, which is prevented by
    /// this crate's tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_CATALOG).expect("embedded catalog is valid")
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.archetypes.is_empty() {
            return Err(CatalogError::NoArchetypes);
        }

        let mut archetype_ids = HashSet::new();
        for archetype in &self.archetypes {
            if !archetype_ids.insert(archetype.id.as_str()) {
                return Err(CatalogError::DuplicateArchetype(archetype.id.clone()));
            }
            if archetype.appearances.is_empty() {
                return Err(CatalogError::NoAppearances(archetype.id.clone()));
            }
            let mut appearance_ids = HashSet::new();
            for appearance in &archetype.appearances {
                if !appearance_ids.insert(appearance.id.as_str()) {
                    return Err(CatalogError::DuplicateAppearance {
                        archetype_id: archetype.id.clone(),
                        appearance_id: appearance.id.clone(),
                    });
                }
            }
        }

        if self.name_pool.is_empty() {
            return Err(CatalogError::EmptyNamePool);
        }
        for name in &self.name_pool {
            // Pool entries seed the name field directly, so they must be
            // accepted by the same rule the input boundary applies.
            if !fits_name_cap(name) || classify_name(name) != NameVerdict::Valid {
                return Err(CatalogError::InvalidPoolName(name.clone()));
            }
        }

        Ok(())
    }

    /// Looks up an archetype by id.
    #[must_use]
    pub fn archetype(&self, archetype_id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.id == archetype_id)
    }

    /// All archetypes, in authored order.
    #[must_use]
    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    /// The fixed default-name pool.
    #[must_use]
    pub fn name_pool(&self) -> &[String] {
        &self.name_pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_yaml() -> String {
        r#"
archetypes:
  - id: knight
    display_name: Knight
    class_label: Warrior
    description: A stalwart defender.
    attributes: { strength: 16, agility: 10, intelligence: 9, wisdom: 12, charisma: 11 }
    theme: red
    icon: "K"
    appearances:
      - { id: knight-1, display_name: Sentinel, image_ref: art/knight-1 }
name_pool: [Aldric]
"#
        .to_owned()
    }

    #[test]
    fn test_from_yaml_accepts_minimal_document() {
        let catalog = ArchetypeCatalog::from_yaml(&minimal_yaml()).unwrap();

        assert_eq!(catalog.archetypes().len(), 1);
        assert_eq!(catalog.name_pool(), ["Aldric"]);
        let knight = catalog.archetype("knight").unwrap();
        assert_eq!(knight.class_label, "Warrior");
        assert_eq!(knight.appearance("knight-1").unwrap().display_name, "Sentinel");
    }

    #[test]
    fn test_archetype_lookup_misses_unknown_id() {
        let catalog = ArchetypeCatalog::from_yaml(&minimal_yaml()).unwrap();

        assert!(catalog.archetype("paladin").is_none());
        assert!(catalog.archetype("knight").unwrap().appearance("knight-9").is_none());
    }

    #[test]
    fn test_from_yaml_rejects_empty_archetype_list() {
        let yaml = "archetypes: []\nname_pool: [Aldric]\n";

        let result = ArchetypeCatalog::from_yaml(yaml);

        assert!(matches!(result.unwrap_err(), CatalogError::NoArchetypes));
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_archetype_ids() {
        let yaml = minimal_yaml().replace(
            "name_pool:",
            r#"  - id: knight
    display_name: Second Knight
    class_label: Warrior
    description: A copy.
    attributes: { strength: 16, agility: 10, intelligence: 9, wisdom: 12, charisma: 11 }
    theme: blue
    icon: "K"
    appearances:
      - { id: knight-1, display_name: Shadow, image_ref: art/knight-1 }
name_pool:"#,
        );

        let result = ArchetypeCatalog::from_yaml(&yaml);

        match result.unwrap_err() {
            CatalogError::DuplicateArchetype(id) => assert_eq!(id, "knight"),
            other => panic!("expected DuplicateArchetype, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_archetype_without_appearances() {
        let yaml = r#"
archetypes:
  - id: knight
    display_name: Knight
    class_label: Warrior
    description: A stalwart defender.
    attributes: { strength: 16, agility: 10, intelligence: 9, wisdom: 12, charisma: 11 }
    theme: red
    icon: "K"
    appearances: []
name_pool: [Aldric]
"#;

        let result = ArchetypeCatalog::from_yaml(yaml);

        match result.unwrap_err() {
            CatalogError::NoAppearances(id) => assert_eq!(id, "knight"),
            other => panic!("expected NoAppearances, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_appearance_ids() {
        let yaml = minimal_yaml().replace(
            "name_pool:",
            r#"      - { id: knight-1, display_name: Duplicate, image_ref: art/knight-1b }
name_pool:"#,
        );

        let result = ArchetypeCatalog::from_yaml(&yaml);

        match result.unwrap_err() {
            CatalogError::DuplicateAppearance {
                archetype_id,
                appearance_id,
            } => {
                assert_eq!(archetype_id, "knight");
                assert_eq!(appearance_id, "knight-1");
            }
            other => panic!("expected DuplicateAppearance, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_empty_name_pool() {
        let yaml = minimal_yaml().replace("name_pool: [Aldric]", "name_pool: []");

        let result = ArchetypeCatalog::from_yaml(&yaml);

        assert!(matches!(result.unwrap_err(), CatalogError::EmptyNamePool));
    }

    #[test]
    fn test_from_yaml_rejects_single_character_pool_name() {
        let yaml = minimal_yaml().replace("name_pool: [Aldric]", "name_pool: [X]");

        let result = ArchetypeCatalog::from_yaml(&yaml);

        match result.unwrap_err() {
            CatalogError::InvalidPoolName(name) => assert_eq!(name, "X"),
            other => panic!("expected InvalidPoolName, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_over_cap_pool_name() {
        let long_name = "N".repeat(31);
        let yaml = minimal_yaml().replace("name_pool: [Aldric]", &format!("name_pool: [{long_name}]"));

        let result = ArchetypeCatalog::from_yaml(&yaml);

        assert!(matches!(result.unwrap_err(), CatalogError::InvalidPoolName(_)));
    }

    #[test]
    fn test_from_yaml_rejects_malformed_document() {
        let result = ArchetypeCatalog::from_yaml("archetypes: 12");

        assert!(matches!(result.unwrap_err(), CatalogError::Parse(_)));
    }
}
