//! Domain events for the wizard context.

use chargen_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::composed::ComposedCharacter;

/// The three wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Choose an archetype.
    Type,
    /// Choose an appearance belonging to the archetype.
    Appearance,
    /// Name the character and confirm.
    Naming,
}

impl WizardStep {
    /// The step a Back navigation returns to, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Type => None,
            Self::Appearance => Some(Self::Type),
            Self::Naming => Some(Self::Appearance),
        }
    }
}

/// Emitted when an archetype is chosen on the type step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeChosen {
    /// The session identifier.
    pub session_id: Uuid,
    /// The chosen archetype's catalog id.
    pub archetype_id: String,
    /// The default name seeded from the pool on this transition.
    pub default_name: String,
}

/// Emitted when an appearance is chosen on the appearance step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceChosen {
    /// The session identifier.
    pub session_id: Uuid,
    /// The chosen appearance's id.
    pub appearance_id: String,
    /// The default name re-drawn from the pool on this transition.
    pub default_name: String,
}

/// Emitted when the candidate name changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameChanged {
    /// The session identifier.
    pub session_id: Uuid,
    /// The new raw (untrimmed) name, already within the input cap.
    pub name: String,
}

/// Emitted when the user navigates one step backwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteppedBack {
    /// The session identifier.
    pub session_id: Uuid,
    /// The step navigated away from.
    pub from: WizardStep,
    /// The step navigated back to.
    pub to: WizardStep,
}

/// Emitted when the wizard is abandoned without a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardCancelled {
    /// The session identifier.
    pub session_id: Uuid,
}

/// Emitted when the naming step confirms and the character is composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterComposed {
    /// The session identifier.
    pub session_id: Uuid,
    /// The assembled character.
    pub character: ComposedCharacter,
}

/// Event payload variants for the wizard context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// An archetype has been chosen.
    ArchetypeChosen(ArchetypeChosen),
    /// An appearance has been chosen.
    AppearanceChosen(AppearanceChosen),
    /// The candidate name has changed.
    NameChanged(NameChanged),
    /// The user navigated one step backwards.
    SteppedBack(SteppedBack),
    /// The wizard was cancelled.
    WizardCancelled(WizardCancelled),
    /// The character was composed.
    CharacterComposed(CharacterComposed),
}

impl WizardEventKind {
    /// The event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ArchetypeChosen(_) => "wizard.archetype_chosen",
            Self::AppearanceChosen(_) => "wizard.appearance_chosen",
            Self::NameChanged(_) => "wizard.name_changed",
            Self::SteppedBack(_) => "wizard.stepped_back",
            Self::WizardCancelled(_) => "wizard.cancelled",
            Self::CharacterComposed(_) => "wizard.character_composed",
        }
    }
}

/// Domain event envelope for the wizard context.
#[derive(Debug, Clone)]
pub struct WizardEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: WizardEventKind,
}

impl DomainEvent for WizardEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("WizardEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_walks_the_step_order_backwards() {
        assert_eq!(WizardStep::Type.previous(), None);
        assert_eq!(WizardStep::Appearance.previous(), Some(WizardStep::Type));
        assert_eq!(WizardStep::Naming.previous(), Some(WizardStep::Appearance));
    }

    #[test]
    fn test_event_type_names_cover_every_kind() {
        let session_id = Uuid::new_v4();
        let kind = WizardEventKind::SteppedBack(SteppedBack {
            session_id,
            from: WizardStep::Naming,
            to: WizardStep::Appearance,
        });

        assert_eq!(kind.event_type(), "wizard.stepped_back");
    }
}
