//! Chargen — static archetype catalog.
//!
//! The catalog is the wizard's read-only content collaborator: a fixed
//! set of archetypes (each with appearance options) plus the default-name
//! pool. It is parsed from YAML once, validated for internal consistency,
//! and never mutated afterwards.

mod catalog;
mod error;
mod types;

pub use catalog::ArchetypeCatalog;
pub use error::CatalogError;
pub use types::{AppearanceOption, Archetype, AttributeBlock, ThemeColor};
