//! Interactive field prompts built on `inquire`.

use inquire::{Confirm, InquireError, Select, Text};

use crate::dto::supplier::{CANCEL_LABEL, SUBMIT_LABEL};
use crate::forms::supplier::SupplierField;
use crate::services::supplier::SupplierEditPage;

/// What the user chose after editing the fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Cancel,
}

/// Walks through every input pre-filled with its current value.
///
/// Escape or Ctrl-C at any prompt counts as cancel.
pub fn prompt_form(page: &mut SupplierEditPage) -> Result<FormAction, InquireError> {
    for field in SupplierField::ALL {
        let label = format!("{}:", field.label());
        let current = page.form().get(field).to_string();
        let help = match field {
            SupplierField::Name => page.validation().error(field).map(str::to_string),
            _ => None,
        };

        let mut prompt = Text::new(&label).with_initial_value(&current);
        if let Some(help) = help.as_deref() {
            prompt = prompt.with_help_message(help);
        }

        let value = match prompt.prompt() {
            Ok(value) => value,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(FormAction::Cancel);
            }
            Err(err) => return Err(err),
        };

        if let Err(err) = page.set_field(field, value) {
            log::warn!("Edit of {field} ignored: {err}");
        }
    }

    match Select::new("Action:", vec![SUBMIT_LABEL, CANCEL_LABEL]).prompt() {
        Ok(SUBMIT_LABEL) => Ok(FormAction::Save),
        Ok(_) | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(FormAction::Cancel)
        }
        Err(err) => Err(err),
    }
}

/// Asks whether to try saving again after a failed update.
pub fn confirm_retry() -> Result<bool, InquireError> {
    match Confirm::new("Try again?").with_default(true).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err),
    }
}
