//! Catalog load errors.

use thiserror::Error;

/// Errors raised while parsing or validating a catalog document.
///
/// A catalog that fails any of these checks is rejected wholesale at
/// load time; no partially valid catalog ever reaches a wizard.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The YAML document could not be parsed.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document contains no archetypes.
    #[error("catalog must contain at least one archetype")]
    NoArchetypes,

    /// Two archetypes share an id.
    #[error("duplicate archetype id: {0}")]
    DuplicateArchetype(String),

    /// An archetype has an empty appearance list.
    #[error("archetype {0} has no appearance options")]
    NoAppearances(String),

    /// Two appearances within one archetype share an id.
    #[error("duplicate appearance id {appearance_id} in archetype {archetype_id}")]
    DuplicateAppearance {
        /// The owning archetype.
        archetype_id: String,
        /// The duplicated appearance id.
        appearance_id: String,
    },

    /// The default-name pool is empty.
    #[error("catalog name pool is empty")]
    EmptyNamePool,

    /// A pool entry would be rejected by the name rule as-is.
    #[error("name pool entry {0:?} is not a usable default name")]
    InvalidPoolName(String),
}
