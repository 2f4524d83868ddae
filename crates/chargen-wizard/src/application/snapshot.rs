//! Read-only render view of the current wizard state.

use chargen_catalog::{AppearanceOption, Archetype, ArchetypeCatalog};
use chargen_core::naming::{NameVerdict, classify_name};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::WizardSession;
use crate::domain::events::WizardStep;

/// Everything a rendering host needs to draw the wizard.
///
/// Hosts consume snapshots and forward user events; there is no other
/// channel back into the wizard.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    /// The session identifier.
    pub session_id: Uuid,
    /// The current step.
    pub step: WizardStep,
    /// The chosen archetype, resolved against the catalog.
    pub archetype: Option<Archetype>,
    /// The chosen appearance, resolved against the chosen archetype.
    pub appearance: Option<AppearanceOption>,
    /// The candidate name as the user left it.
    pub name: String,
    /// Classification of the candidate name.
    pub name_verdict: NameVerdict,
    /// Whether Back is available (every step but the first).
    pub can_go_back: bool,
    /// Whether the confirm gate would currently pass.
    pub can_confirm: bool,
}

impl WizardSnapshot {
    /// Captures the current state of a session.
    pub(crate) fn capture(session: &WizardSession, catalog: &ArchetypeCatalog) -> Self {
        let archetype = session
            .chosen_archetype()
            .and_then(|id| catalog.archetype(id))
            .cloned();
        let appearance = archetype.as_ref().and_then(|a| {
            session
                .chosen_appearance()
                .and_then(|id| a.appearance(id))
                .cloned()
        });
        let name_verdict = classify_name(session.name());
        let can_confirm = session.step() == WizardStep::Naming
            && archetype.is_some()
            && appearance.is_some()
            && name_verdict == NameVerdict::Valid;

        Self {
            session_id: session.id,
            step: session.step(),
            archetype,
            appearance,
            name: session.name().to_owned(),
            name_verdict,
            can_go_back: session.step() != WizardStep::Type,
            can_confirm,
        }
    }
}
