//! Fixture catalog — a small synthetic content set for wizard tests.

use chargen_catalog::ArchetypeCatalog;

const FIXTURE_YAML: &str = r#"
archetypes:
  - id: warrior
    display_name: Stalwart Defender
    class_label: Warrior
    description: Fixture warrior.
    attributes: { strength: 18, agility: 12, intelligence: 10, wisdom: 14, charisma: 13 }
    theme: red
    icon: "W"
    appearances:
      - { id: warrior-1, display_name: Noble Knight, image_ref: art/warrior-1 }
      - { id: warrior-2, display_name: Veteran, image_ref: art/warrior-2 }
  - id: mage
    display_name: Arcane Scholar
    class_label: Mage
    description: Fixture mage.
    attributes: { strength: 8, agility: 10, intelligence: 18, wisdom: 16, charisma: 14 }
    theme: blue
    icon: "M"
    appearances:
      - { id: mage-1, display_name: Scholar, image_ref: art/mage-1 }
      - { id: mage-2, display_name: Wanderer, image_ref: art/mage-2 }
name_pool: [Seraphina, Ragnar, Lyra]
"#;

/// Builds a two-archetype catalog with a three-name pool.
///
/// Pool order is fixed (`Seraphina`, `Ragnar`, `Lyra`) so a
/// [`crate::SequenceRng`] scripted with pool indexes selects names
/// predictably.
///
/// # Panics
///
/// Panics if the fixture document is invalid, which would be a bug in
/// this crate.
#[must_use]
pub fn fixture_catalog() -> ArchetypeCatalog {
    ArchetypeCatalog::from_yaml(FIXTURE_YAML).expect("fixture catalog is valid")
}
