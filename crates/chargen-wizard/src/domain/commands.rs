//! Commands for the wizard context — one per host operation.

use chargen_core::command::Command;
use uuid::Uuid;

/// Command to choose an archetype on the type step.
#[derive(Debug, Clone)]
pub struct SelectArchetype {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The catalog id of the archetype to choose.
    pub archetype_id: String,
}

impl Command for SelectArchetype {
    fn command_type(&self) -> &'static str {
        "wizard.select_archetype"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to choose an appearance on the appearance step.
#[derive(Debug, Clone)]
pub struct SelectAppearance {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The id of the appearance to choose; must belong to the chosen
    /// archetype's list.
    pub appearance_id: String,
}

impl Command for SelectAppearance {
    fn command_type(&self) -> &'static str {
        "wizard.select_appearance"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the candidate character name.
#[derive(Debug, Clone)]
pub struct SetName {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The raw (untrimmed) candidate name.
    pub raw_name: String,
}

impl Command for SetName {
    fn command_type(&self) -> &'static str {
        "wizard.set_name"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to navigate one step backwards.
#[derive(Debug, Clone)]
pub struct GoBack {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for GoBack {
    fn command_type(&self) -> &'static str {
        "wizard.go_back"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to abandon the wizard without a result.
#[derive(Debug, Clone)]
pub struct CancelWizard {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for CancelWizard {
    fn command_type(&self) -> &'static str {
        "wizard.cancel"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to confirm the naming step and compose the character.
#[derive(Debug, Clone)]
pub struct ConfirmCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ConfirmCharacter {
    fn command_type(&self) -> &'static str {
        "wizard.confirm"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
