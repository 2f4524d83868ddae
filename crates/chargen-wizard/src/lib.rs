//! Chargen — character-creation wizard bounded context.
//!
//! Owns step sequencing, per-step selection state, validation gating,
//! and the assembly of the final composed character. Rendering hosts
//! drive the [`application::controller::WizardController`] and draw from
//! its snapshots; they never mutate wizard state directly.

pub mod application;
pub mod domain;
