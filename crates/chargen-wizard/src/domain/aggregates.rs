//! The wizard session aggregate.

use chargen_catalog::Archetype;
use chargen_core::clock::Clock;
use chargen_core::error::DomainError;
use chargen_core::event::EventMetadata;
use chargen_core::naming::{NameVerdict, classify_name, fits_name_cap};
use chargen_core::rng::DeterministicRng;
use uuid::Uuid;

use super::composed::ComposedCharacter;
use super::events::{
    AppearanceChosen, ArchetypeChosen, CharacterComposed, NameChanged, SteppedBack, WizardCancelled,
    WizardEvent, WizardEventKind, WizardStep,
};

/// Draws a default name uniformly from the pool.
///
/// The pool is catalog-validated to be non-empty and to contain only
/// names the input boundary would accept.
#[allow(clippy::cast_possible_truncation)]
fn draw_default_name(name_pool: &[String], rng: &mut dyn DeterministicRng) -> String {
    let last = (name_pool.len() - 1) as u32;
    let index = rng.next_u32_range(0, last) as usize;
    name_pool[index].clone()
}

/// The aggregate root for one wizard run.
///
/// A fresh session starts on the type step with nothing selected. Every
/// state change flows through an event: command methods validate and
/// emit, [`WizardSession::apply`] is the single mutator.
#[derive(Debug)]
pub struct WizardSession {
    /// Session identifier.
    pub id: Uuid,
    /// Current version (event count).
    version: i64,
    /// Current step.
    step: WizardStep,
    /// Chosen archetype id (set once the type step completes).
    chosen_archetype: Option<String>,
    /// Chosen appearance id; always belongs to the chosen archetype.
    chosen_appearance: Option<String>,
    /// Candidate character name, raw as the user left it.
    name: String,
    /// The terminal result, set on successful confirmation.
    composed: Option<ComposedCharacter>,
    /// Events produced by command handling, pending application.
    pending_events: Vec<WizardEvent>,
}

impl WizardSession {
    /// Creates a fresh session on the type step.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            step: WizardStep::Type,
            chosen_archetype: None,
            chosen_appearance: None,
            name: String::new(),
            composed: None,
            pending_events: Vec::new(),
        }
    }

    /// Returns the current step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the chosen archetype id, if the type step has completed.
    #[must_use]
    pub fn chosen_archetype(&self) -> Option<&str> {
        self.chosen_archetype.as_deref()
    }

    /// Returns the chosen appearance id, if the appearance step has
    /// completed.
    #[must_use]
    pub fn chosen_appearance(&self) -> Option<&str> {
        self.chosen_appearance.as_deref()
    }

    /// Returns the candidate name as the user left it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the composed character, if confirmation has succeeded.
    #[must_use]
    pub fn composed(&self) -> Option<&ComposedCharacter> {
        self.composed.as_ref()
    }

    /// Returns the current version (number of events applied).
    #[must_use]
    pub fn version(&self) -> i64 {
        self.version
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.pending_events.len() as i64 + 1
    }

    fn push_event(&mut self, kind: WizardEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = WizardEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                causation_id: correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.pending_events.push(event);
    }

    /// Chooses an archetype, producing an `ArchetypeChosen` event that
    /// advances to the appearance step and seeds a default name drawn
    /// from the pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not on the type step.
    pub fn select_archetype(
        &mut self,
        archetype: &Archetype,
        name_pool: &[String],
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        if self.step != WizardStep::Type {
            return Err(DomainError::Validation(
                "archetype can only be chosen on the type step".to_owned(),
            ));
        }

        let default_name = draw_default_name(name_pool, rng);
        self.push_event(
            WizardEventKind::ArchetypeChosen(ArchetypeChosen {
                session_id: self.id,
                archetype_id: archetype.id.clone(),
                default_name,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Chooses an appearance, producing an `AppearanceChosen` event that
    /// advances to the naming step and re-draws the default name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not on the appearance step or
    /// if `archetype` is not the chosen one, and `DomainError::UnknownId`
    /// if the appearance does not belong to the chosen archetype.
    pub fn select_appearance(
        &mut self,
        archetype: &Archetype,
        appearance_id: &str,
        name_pool: &[String],
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        if self.step != WizardStep::Appearance {
            return Err(DomainError::Validation(
                "appearance can only be chosen on the appearance step".to_owned(),
            ));
        }
        if self.chosen_archetype.as_deref() != Some(archetype.id.as_str()) {
            return Err(DomainError::Validation(
                "appearance archetype does not match the chosen archetype".to_owned(),
            ));
        }
        if archetype.appearance(appearance_id).is_none() {
            return Err(DomainError::UnknownId(appearance_id.to_owned()));
        }

        let default_name = draw_default_name(name_pool, rng);
        self.push_event(
            WizardEventKind::AppearanceChosen(AppearanceChosen {
                session_id: self.id,
                appearance_id: appearance_id.to_owned(),
                default_name,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Replaces the candidate name, producing a `NameChanged` event.
    ///
    /// Accepted on any step; only the naming step's confirm gate reads
    /// the value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the raw value exceeds the
    /// hard input cap; the stored name is left unchanged.
    pub fn set_name(
        &mut self,
        raw_name: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if !fits_name_cap(raw_name) {
            return Err(DomainError::Validation(
                "name exceeds the input length cap".to_owned(),
            ));
        }

        self.push_event(
            WizardEventKind::NameChanged(NameChanged {
                session_id: self.id,
                name: raw_name.to_owned(),
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Navigates one step backwards, producing a `SteppedBack` event.
    ///
    /// Backing out of the appearance step discards both selections
    /// (the type step is no longer complete); backing out of the naming
    /// step keeps the appearance and the name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when already on the first step.
    pub fn go_back(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), DomainError> {
        let Some(to) = self.step.previous() else {
            return Err(DomainError::Validation(
                "already on the first step".to_owned(),
            ));
        };

        self.push_event(
            WizardEventKind::SteppedBack(SteppedBack {
                session_id: self.id,
                from: self.step,
                to,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Abandons the wizard, producing a `WizardCancelled` event that
    /// discards all in-progress state. Permitted on every step.
    pub fn cancel(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        self.push_event(
            WizardEventKind::WizardCancelled(WizardCancelled {
                session_id: self.id,
            }),
            correlation_id,
            clock,
        );
    }

    /// Confirms the naming step, producing a `CharacterComposed` event.
    ///
    /// All three step invariants are re-checked here, not only at the
    /// controls layer: archetype chosen, appearance chosen and belonging
    /// to it, name valid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any invariant does not hold.
    pub fn confirm(
        &mut self,
        archetype: &Archetype,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.step != WizardStep::Naming {
            return Err(DomainError::Validation(
                "confirmation is only available on the naming step".to_owned(),
            ));
        }
        if self.chosen_archetype.as_deref() != Some(archetype.id.as_str()) {
            return Err(DomainError::Validation(
                "confirmed archetype does not match the chosen archetype".to_owned(),
            ));
        }
        let appearance = self
            .chosen_appearance
            .as_deref()
            .and_then(|id| archetype.appearance(id))
            .ok_or_else(|| {
                DomainError::Validation(
                    "no appearance chosen for the chosen archetype".to_owned(),
                )
            })?;
        if classify_name(&self.name) != NameVerdict::Valid {
            return Err(DomainError::Validation(
                "character name is not valid".to_owned(),
            ));
        }

        let character =
            ComposedCharacter::from_parts(archetype, appearance, &self.name, clock.now());
        self.push_event(
            WizardEventKind::CharacterComposed(CharacterComposed {
                session_id: self.id,
                character,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Apply an event to mutate state. The single mutation path, for
    /// both freshly produced and replayed events.
    pub fn apply(&mut self, event: &WizardEvent) {
        match &event.kind {
            WizardEventKind::ArchetypeChosen(payload) => {
                self.step = WizardStep::Appearance;
                self.chosen_archetype = Some(payload.archetype_id.clone());
                // A new archetype invalidates any appearance chosen under
                // a previous one.
                self.chosen_appearance = None;
                self.name = payload.default_name.clone();
            }
            WizardEventKind::AppearanceChosen(payload) => {
                self.step = WizardStep::Naming;
                self.chosen_appearance = Some(payload.appearance_id.clone());
                self.name = payload.default_name.clone();
            }
            WizardEventKind::NameChanged(payload) => {
                self.name = payload.name.clone();
            }
            WizardEventKind::SteppedBack(payload) => {
                self.step = payload.to;
                if payload.from == WizardStep::Appearance {
                    self.chosen_archetype = None;
                    self.chosen_appearance = None;
                }
            }
            WizardEventKind::WizardCancelled(_) => {
                self.step = WizardStep::Type;
                self.chosen_archetype = None;
                self.chosen_appearance = None;
                self.name.clear();
                self.composed = None;
            }
            WizardEventKind::CharacterComposed(payload) => {
                self.composed = Some(payload.character.clone());
            }
        }
        self.version += 1;
    }

    /// Returns events produced by command handling, not yet applied.
    #[must_use]
    pub fn pending_events(&self) -> &[WizardEvent] {
        &self.pending_events
    }

    /// Clears pending events after they have been applied.
    pub fn clear_pending_events(&mut self) {
        self.pending_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargen_core::event::DomainEvent;
    use chargen_test_support::{FixedClock, MockRng, SequenceRng, fixture_catalog};
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn commit(session: &mut WizardSession) {
        for event in session.pending_events().to_vec() {
            session.apply(&event);
        }
        session.clear_pending_events();
    }

    // --- select_archetype tests ---

    #[test]
    fn test_select_archetype_on_type_step_produces_event() {
        let catalog = fixture_catalog();
        let correlation_id = Uuid::new_v4();
        let clock = fixed_clock();
        let mut rng = SequenceRng::new(vec![2]);
        let mut session = WizardSession::new(Uuid::new_v4());

        let result = session.select_archetype(
            catalog.archetype("warrior").unwrap(),
            catalog.name_pool(),
            correlation_id,
            &clock,
            &mut rng,
        );

        assert!(result.is_ok());
        let events = session.pending_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "wizard.archetype_chosen");

        let meta = events[0].metadata();
        assert_eq!(meta.aggregate_id, session.id);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, correlation_id);

        match &events[0].kind {
            WizardEventKind::ArchetypeChosen(payload) => {
                assert_eq!(payload.archetype_id, "warrior");
                // Pool index 2 in the fixture is "Lyra".
                assert_eq!(payload.default_name, "Lyra");
            }
            other => panic!("expected ArchetypeChosen, got {other:?}"),
        }
    }

    #[test]
    fn test_select_archetype_off_the_type_step_returns_error() {
        let catalog = fixture_catalog();
        let mut session = WizardSession::new(Uuid::new_v4());
        session.step = WizardStep::Appearance;

        let result = session.select_archetype(
            catalog.archetype("warrior").unwrap(),
            catalog.name_pool(),
            Uuid::new_v4(),
            &fixed_clock(),
            &mut MockRng,
        );

        assert!(result.is_err());
        match result.unwrap_err() {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "archetype can only be chosen on the type step");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_archetype_chosen_advances_and_seeds_name() {
        let mut session = WizardSession::new(Uuid::new_v4());
        session.chosen_appearance = Some("stale-1".to_owned());
        let event = WizardEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: "wizard.archetype_chosen".to_owned(),
                aggregate_id: session.id,
                sequence_number: 1,
                correlation_id: Uuid::new_v4(),
                causation_id: Uuid::new_v4(),
                occurred_at: Utc::now(),
            },
            kind: WizardEventKind::ArchetypeChosen(ArchetypeChosen {
                session_id: session.id,
                archetype_id: "mage".to_owned(),
                default_name: "Seraphina".to_owned(),
            }),
        };

        session.apply(&event);

        assert_eq!(session.step(), WizardStep::Appearance);
        assert_eq!(session.chosen_archetype(), Some("mage"));
        assert_eq!(session.chosen_appearance(), None);
        assert_eq!(session.name(), "Seraphina");
        assert_eq!(session.version(), 1);
    }

    // --- select_appearance tests ---

    fn session_on_appearance_step(archetype_id: &str) -> WizardSession {
        let catalog = fixture_catalog();
        let mut session = WizardSession::new(Uuid::new_v4());
        session
            .select_archetype(
                catalog.archetype(archetype_id).unwrap(),
                catalog.name_pool(),
                Uuid::new_v4(),
                &fixed_clock(),
                &mut MockRng,
            )
            .unwrap();
        commit(&mut session);
        session
    }

    #[test]
    fn test_select_appearance_on_appearance_step_produces_event() {
        let catalog = fixture_catalog();
        let mut session = session_on_appearance_step("warrior");
        let mut rng = SequenceRng::new(vec![1]);

        let result = session.select_appearance(
            catalog.archetype("warrior").unwrap(),
            "warrior-2",
            catalog.name_pool(),
            Uuid::new_v4(),
            &fixed_clock(),
            &mut rng,
        );

        assert!(result.is_ok());
        let events = session.pending_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "wizard.appearance_chosen");
        assert_eq!(events[0].metadata().sequence_number, 2);

        match &events[0].kind {
            WizardEventKind::AppearanceChosen(payload) => {
                assert_eq!(payload.appearance_id, "warrior-2");
                // Pool index 1 in the fixture is "Ragnar".
                assert_eq!(payload.default_name, "Ragnar");
            }
            other => panic!("expected AppearanceChosen, got {other:?}"),
        }
    }

    #[test]
    fn test_select_appearance_on_type_step_returns_error() {
        let catalog = fixture_catalog();
        let mut session = WizardSession::new(Uuid::new_v4());

        let result = session.select_appearance(
            catalog.archetype("warrior").unwrap(),
            "warrior-1",
            catalog.name_pool(),
            Uuid::new_v4(),
            &fixed_clock(),
            &mut MockRng,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_select_appearance_foreign_to_archetype_returns_unknown_id() {
        let catalog = fixture_catalog();
        let mut session = session_on_appearance_step("warrior");

        let result = session.select_appearance(
            catalog.archetype("warrior").unwrap(),
            "mage-1",
            catalog.name_pool(),
            Uuid::new_v4(),
            &fixed_clock(),
            &mut MockRng,
        );

        assert!(result.is_err());
        match result.unwrap_err() {
            DomainError::UnknownId(id) => assert_eq!(id, "mage-1"),
            other => panic!("expected UnknownId, got {other:?}"),
        }
        assert!(session.pending_events().is_empty());
    }

    #[test]
    fn test_select_appearance_with_mismatched_archetype_returns_error() {
        let catalog = fixture_catalog();
        let mut session = session_on_appearance_step("warrior");

        let result = session.select_appearance(
            catalog.archetype("mage").unwrap(),
            "mage-1",
            catalog.name_pool(),
            Uuid::new_v4(),
            &fixed_clock(),
            &mut MockRng,
        );

        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
    }

    #[test]
    fn test_apply_appearance_chosen_advances_and_redraws_name() {
        let mut session = session_on_appearance_step("warrior");
        let event = WizardEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: "wizard.appearance_chosen".to_owned(),
                aggregate_id: session.id,
                sequence_number: 2,
                correlation_id: Uuid::new_v4(),
                causation_id: Uuid::new_v4(),
                occurred_at: Utc::now(),
            },
            kind: WizardEventKind::AppearanceChosen(AppearanceChosen {
                session_id: session.id,
                appearance_id: "warrior-1".to_owned(),
                default_name: "Ragnar".to_owned(),
            }),
        };

        session.apply(&event);

        assert_eq!(session.step(), WizardStep::Naming);
        assert_eq!(session.chosen_archetype(), Some("warrior"));
        assert_eq!(session.chosen_appearance(), Some("warrior-1"));
        assert_eq!(session.name(), "Ragnar");
    }

    // --- set_name tests ---

    #[test]
    fn test_set_name_within_cap_produces_event() {
        let mut session = WizardSession::new(Uuid::new_v4());

        let result = session.set_name("Thorgrim", Uuid::new_v4(), &fixed_clock());

        assert!(result.is_ok());
        assert_eq!(session.pending_events().len(), 1);
        commit(&mut session);
        assert_eq!(session.name(), "Thorgrim");
    }

    #[test]
    fn test_set_name_beyond_cap_is_rejected_without_state_change() {
        let mut session = WizardSession::new(Uuid::new_v4());
        session.set_name("Keeper", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.set_name(&"X".repeat(31), Uuid::new_v4(), &fixed_clock());

        assert!(result.is_err());
        assert!(session.pending_events().is_empty());
        assert_eq!(session.name(), "Keeper");
    }

    #[test]
    fn test_set_name_stores_raw_untrimmed_value() {
        let mut session = WizardSession::new(Uuid::new_v4());

        session.set_name("  Al  ", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        assert_eq!(session.name(), "  Al  ");
    }

    // --- go_back tests ---

    #[test]
    fn test_go_back_from_type_step_returns_error() {
        let mut session = WizardSession::new(Uuid::new_v4());

        let result = session.go_back(Uuid::new_v4(), &fixed_clock());

        assert!(result.is_err());
        match result.unwrap_err() {
            DomainError::Validation(msg) => assert_eq!(msg, "already on the first step"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_go_back_from_appearance_discards_both_selections() {
        let mut session = session_on_appearance_step("mage");

        session.go_back(Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        assert_eq!(session.step(), WizardStep::Type);
        assert_eq!(session.chosen_archetype(), None);
        assert_eq!(session.chosen_appearance(), None);
    }

    #[test]
    fn test_go_back_from_naming_keeps_appearance_and_name() {
        let catalog = fixture_catalog();
        let mut session = session_on_appearance_step("warrior");
        session
            .select_appearance(
                catalog.archetype("warrior").unwrap(),
                "warrior-1",
                catalog.name_pool(),
                Uuid::new_v4(),
                &fixed_clock(),
                &mut MockRng,
            )
            .unwrap();
        commit(&mut session);
        session.set_name("Thorgrim", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        session.go_back(Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        assert_eq!(session.step(), WizardStep::Appearance);
        assert_eq!(session.chosen_archetype(), Some("warrior"));
        assert_eq!(session.chosen_appearance(), Some("warrior-1"));
        assert_eq!(session.name(), "Thorgrim");
    }

    // --- cancel tests ---

    #[test]
    fn test_cancel_discards_all_selection_state() {
        let mut session = session_on_appearance_step("warrior");

        session.cancel(Uuid::new_v4(), &fixed_clock());
        commit(&mut session);

        assert_eq!(session.step(), WizardStep::Type);
        assert_eq!(session.chosen_archetype(), None);
        assert_eq!(session.chosen_appearance(), None);
        assert_eq!(session.name(), "");
    }

    // --- confirm tests ---

    fn session_on_naming_step() -> WizardSession {
        let catalog = fixture_catalog();
        let mut session = session_on_appearance_step("warrior");
        session
            .select_appearance(
                catalog.archetype("warrior").unwrap(),
                "warrior-1",
                catalog.name_pool(),
                Uuid::new_v4(),
                &fixed_clock(),
                &mut MockRng,
            )
            .unwrap();
        commit(&mut session);
        session
    }

    #[test]
    fn test_confirm_with_all_invariants_produces_composed_event() {
        let catalog = fixture_catalog();
        let mut session = session_on_naming_step();
        session.set_name(" Thorgrim ", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.confirm(
            catalog.archetype("warrior").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_ok());
        let events = session.pending_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "wizard.character_composed");

        match &events[0].kind {
            WizardEventKind::CharacterComposed(payload) => {
                assert_eq!(payload.character.archetype_id, "warrior");
                assert_eq!(payload.character.appearance.id, "warrior-1");
                assert_eq!(payload.character.custom_name, "Thorgrim");
                assert_eq!(payload.character.composed_at, fixed_clock().0);
            }
            other => panic!("expected CharacterComposed, got {other:?}"),
        }

        commit(&mut session);
        assert_eq!(session.composed().unwrap().custom_name, "Thorgrim");
    }

    #[test]
    fn test_confirm_off_the_naming_step_returns_error() {
        let catalog = fixture_catalog();
        let mut session = WizardSession::new(Uuid::new_v4());

        let result = session.confirm(
            catalog.archetype("warrior").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_confirm_without_appearance_returns_error() {
        let catalog = fixture_catalog();
        let mut session = session_on_naming_step();
        // Simulate inconsistent state reached by an out-of-order event.
        session.chosen_appearance = None;
        session.set_name("Thorgrim", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.confirm(
            catalog.archetype("warrior").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_confirm_with_blank_name_returns_error() {
        let catalog = fixture_catalog();
        let mut session = session_on_naming_step();
        session.set_name("   ", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.confirm(
            catalog.archetype("warrior").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_confirm_with_too_short_name_returns_error() {
        let catalog = fixture_catalog();
        let mut session = session_on_naming_step();
        session.set_name("T", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.confirm(
            catalog.archetype("warrior").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_confirm_with_mismatched_archetype_returns_error() {
        let catalog = fixture_catalog();
        let mut session = session_on_naming_step();
        session.set_name("Thorgrim", Uuid::new_v4(), &fixed_clock()).unwrap();
        commit(&mut session);

        let result = session.confirm(
            catalog.archetype("mage").unwrap(),
            Uuid::new_v4(),
            &fixed_clock(),
        );

        assert!(result.is_err());
    }

    // --- event stream mechanics ---

    #[test]
    fn test_sequence_numbers_increment_across_commands() {
        let catalog = fixture_catalog();
        let mut session = WizardSession::new(Uuid::new_v4());
        let clock = fixed_clock();

        session
            .select_archetype(
                catalog.archetype("warrior").unwrap(),
                catalog.name_pool(),
                Uuid::new_v4(),
                &clock,
                &mut MockRng,
            )
            .unwrap();
        commit(&mut session);
        session.set_name("Thorgrim", Uuid::new_v4(), &clock).unwrap();

        assert_eq!(session.version(), 1);
        assert_eq!(session.pending_events()[0].metadata().sequence_number, 2);
    }
}
