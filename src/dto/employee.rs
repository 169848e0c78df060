use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::domain::validation::{FormTab, ValidationErrorMap};

/// View state of the open employee dialog, carried in the session between
/// the submit redirect and the next render.
///
/// Created fresh when the dialog opens and dropped when it closes, whether
/// the draft was saved or cancelled.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ModalState {
    pub draft: Employee,
    pub errors: ValidationErrorMap,
    pub active_tab: FormTab,
}

impl ModalState {
    /// State for a freshly opened dialog: empty draft, no errors, general
    /// tab.
    pub fn open() -> Self {
        Self::default()
    }
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent to the endpoint. `tab` is the
    /// section to surface, or `None` when no flagged field routes (the
    /// dialog keeps whatever tab it was on).
    Invalid {
        draft: Employee,
        errors: ValidationErrorMap,
        tab: Option<FormTab>,
    },
    /// The write request completed and the dialog may close.
    Saved,
    /// The write request failed at the transport level; the draft is handed
    /// back so the user can retry without re-entering data.
    Failed { draft: Employee },
}
