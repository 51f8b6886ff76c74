//! DTOs shaped for the supplier edit view.

use serde::Serialize;

pub const PAGE_TITLE: &str = "Edit Supplier";
pub const CANCEL_LABEL: &str = "Cancel";
pub const SUBMIT_LABEL: &str = "Save Changes";

/// One labelled input of the edit form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SupplierFieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// Data required to render the supplier edit page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SupplierEditView {
    pub title: &'static str,
    /// While set only a loading indicator is shown.
    pub loading: bool,
    /// Disables the submit action.
    pub submitting: bool,
    pub fields: Vec<SupplierFieldView>,
    pub cancel_label: &'static str,
    pub submit_label: &'static str,
}
