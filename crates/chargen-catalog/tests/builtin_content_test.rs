//! Integrity checks for the embedded default content set.

use chargen_catalog::{ArchetypeCatalog, ThemeColor};
use chargen_core::naming::{NameVerdict, classify_name};

#[test]
fn test_builtin_catalog_ships_three_archetypes() {
    let catalog = ArchetypeCatalog::builtin();

    let ids: Vec<&str> = catalog.archetypes().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["warrior", "mage", "rogue"]);
}

#[test]
fn test_builtin_warrior_entry_is_complete() {
    let catalog = ArchetypeCatalog::builtin();

    let warrior = catalog.archetype("warrior").unwrap();
    assert_eq!(warrior.class_label, "Warrior");
    assert_eq!(warrior.theme, ThemeColor::Red);
    assert_eq!(warrior.attributes.strength, 18);
    assert_eq!(warrior.attributes.agility, 12);
    assert_eq!(warrior.attributes.intelligence, 10);
    assert_eq!(warrior.attributes.wisdom, 14);
    assert_eq!(warrior.attributes.charisma, 13);
    assert!(!warrior.description.is_empty());
    assert!(!warrior.icon.is_empty());
}

#[test]
fn test_builtin_archetypes_each_offer_two_appearances() {
    let catalog = ArchetypeCatalog::builtin();

    for archetype in catalog.archetypes() {
        assert_eq!(
            archetype.appearances.len(),
            2,
            "archetype {} should ship two appearances",
            archetype.id
        );
        for appearance in &archetype.appearances {
            assert!(appearance.id.starts_with(&archetype.id));
            assert!(!appearance.image_ref.is_empty());
        }
    }
}

#[test]
fn test_builtin_name_pool_entries_are_all_valid_names() {
    let catalog = ArchetypeCatalog::builtin();

    assert!(!catalog.name_pool().is_empty());
    for name in catalog.name_pool() {
        assert_eq!(
            classify_name(name),
            NameVerdict::Valid,
            "pool entry {name:?} must be usable as-is"
        );
    }
}
