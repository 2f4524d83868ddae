//! The wizard controller — the host's only way in and out.
//!
//! The controller wraps the session aggregate behind the inbound
//! operations the host may invoke. Every domain rejection degrades to a
//! logged no-op here: the host sees unchanged state, never an error.

use std::sync::Arc;

use chargen_catalog::ArchetypeCatalog;
use chargen_core::clock::Clock;
use chargen_core::command::Command;
use chargen_core::error::DomainError;
use chargen_core::event::DomainEvent;
use chargen_core::rng::DeterministicRng;
use uuid::Uuid;

use crate::domain::aggregates::WizardSession;
use crate::domain::commands::{
    CancelWizard, ConfirmCharacter, GoBack, SelectAppearance, SelectArchetype, SetName,
};
use crate::domain::composed::ComposedCharacter;
use crate::domain::events::{WizardEvent, WizardEventKind};

use super::snapshot::WizardSnapshot;

/// What a processed command means for the host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardSignal {
    /// State may have changed; the wizard stays open.
    None,
    /// The wizard should close without a result.
    Closed,
    /// The wizard produced its result and should close.
    Composed(ComposedCharacter),
}

/// Sequences the wizard steps against an injected catalog.
///
/// Single-threaded by construction: each command is applied fully before
/// the method returns, so no two transitions are ever in flight.
pub struct WizardController {
    catalog: Arc<ArchetypeCatalog>,
    clock: Box<dyn Clock>,
    rng: Box<dyn DeterministicRng>,
    session: WizardSession,
}

impl WizardController {
    /// Creates a controller over the given catalog and ports, with a
    /// fresh session.
    #[must_use]
    pub fn new(
        catalog: Arc<ArchetypeCatalog>,
        clock: Box<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
    ) -> Self {
        let session = WizardSession::new(Uuid::new_v4());
        tracing::info!(session_id = %session.id, "wizard session created");
        Self {
            catalog,
            clock,
            rng,
            session,
        }
    }

    /// Resets to the initial state: a brand-new session on the type
    /// step with nothing selected. Invoked by the host each time the
    /// wizard surface opens.
    pub fn open(&mut self) {
        self.session = WizardSession::new(Uuid::new_v4());
        tracing::info!(session_id = %self.session.id, "wizard opened");
    }

    /// The catalog this controller serves selections from.
    #[must_use]
    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }

    /// Captures the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::capture(&self.session, &self.catalog)
    }

    /// Chooses an archetype by catalog id.
    pub fn select_archetype(&mut self, archetype_id: &str) -> WizardSignal {
        let command = SelectArchetype {
            correlation_id: Uuid::new_v4(),
            archetype_id: archetype_id.to_owned(),
        };
        let Some(archetype) = self.catalog.archetype(&command.archetype_id) else {
            Self::ignore(&command, &DomainError::UnknownId(command.archetype_id.clone()));
            return WizardSignal::None;
        };

        let result = self.session.select_archetype(
            archetype,
            self.catalog.name_pool(),
            command.correlation_id,
            self.clock.as_ref(),
            self.rng.as_mut(),
        );
        self.settle(&command, result)
    }

    /// Chooses an appearance by id; it must belong to the chosen
    /// archetype.
    pub fn select_appearance(&mut self, appearance_id: &str) -> WizardSignal {
        let command = SelectAppearance {
            correlation_id: Uuid::new_v4(),
            appearance_id: appearance_id.to_owned(),
        };
        let Some(archetype) = self
            .session
            .chosen_archetype()
            .and_then(|id| self.catalog.archetype(id))
        else {
            Self::ignore(
                &command,
                &DomainError::Validation("no archetype chosen".to_owned()),
            );
            return WizardSignal::None;
        };
        let archetype = archetype.clone();

        let result = self.session.select_appearance(
            &archetype,
            &command.appearance_id,
            self.catalog.name_pool(),
            command.correlation_id,
            self.clock.as_ref(),
            self.rng.as_mut(),
        );
        self.settle(&command, result)
    }

    /// Replaces the candidate name with a raw value from the input
    /// boundary.
    pub fn set_name(&mut self, raw_name: &str) -> WizardSignal {
        let command = SetName {
            correlation_id: Uuid::new_v4(),
            raw_name: raw_name.to_owned(),
        };
        let result =
            self.session
                .set_name(&command.raw_name, command.correlation_id, self.clock.as_ref());
        self.settle(&command, result)
    }

    /// Navigates one step backwards. Ignored on the first step.
    pub fn go_back(&mut self) -> WizardSignal {
        let command = GoBack {
            correlation_id: Uuid::new_v4(),
        };
        let result = self.session.go_back(command.correlation_id, self.clock.as_ref());
        self.settle(&command, result)
    }

    /// Abandons the wizard. Always succeeds and yields
    /// [`WizardSignal::Closed`].
    pub fn cancel(&mut self) -> WizardSignal {
        let command = CancelWizard {
            correlation_id: Uuid::new_v4(),
        };
        self.session.cancel(command.correlation_id, self.clock.as_ref());
        self.settle(&command, Ok(()))
    }

    /// Confirms the naming step. Yields
    /// [`WizardSignal::Composed`] when every invariant holds, otherwise
    /// a silent no-op.
    pub fn confirm(&mut self) -> WizardSignal {
        let command = ConfirmCharacter {
            correlation_id: Uuid::new_v4(),
        };
        let Some(archetype) = self
            .session
            .chosen_archetype()
            .and_then(|id| self.catalog.archetype(id))
        else {
            Self::ignore(
                &command,
                &DomainError::Validation("no archetype chosen".to_owned()),
            );
            return WizardSignal::None;
        };
        let archetype = archetype.clone();

        let result = self
            .session
            .confirm(&archetype, command.correlation_id, self.clock.as_ref());
        self.settle(&command, result)
    }

    /// Applies pending events and converts the outcome into a host
    /// signal.
    fn settle(
        &mut self,
        command: &dyn Command,
        result: Result<(), DomainError>,
    ) -> WizardSignal {
        if let Err(error) = result {
            Self::ignore(command, &error);
            return WizardSignal::None;
        }

        let events = self.session.pending_events().to_vec();
        for event in &events {
            self.session.apply(event);
            tracing::info!(
                session_id = %self.session.id,
                event = event.event_type(),
                step = ?self.session.step(),
                "wizard event applied"
            );
        }
        self.session.clear_pending_events();

        events.last().map_or(WizardSignal::None, Self::signal_for)
    }

    fn signal_for(event: &WizardEvent) -> WizardSignal {
        match &event.kind {
            WizardEventKind::WizardCancelled(_) => WizardSignal::Closed,
            WizardEventKind::CharacterComposed(payload) => {
                WizardSignal::Composed(payload.character.clone())
            }
            _ => WizardSignal::None,
        }
    }

    fn ignore(command: &dyn Command, error: &DomainError) {
        // Rejections are part of normal operation (spam-clicking a
        // disabled control lands here), hence debug.
        tracing::debug!(
            command = command.command_type(),
            correlation_id = %command.correlation_id(),
            %error,
            "command ignored"
        );
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
