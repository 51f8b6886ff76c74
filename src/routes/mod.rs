//! Application routes used by the supplier edit page and the router port.

use crate::domain::types::{SupplierId, TypeConstraintError};

pub mod history;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Programmatic navigation provided by the hosting router.
pub trait Navigator {
    /// Pushes `path` as the new current entry.
    fn navigate(&self, path: &str);
    /// Returns to the immediately preceding entry.
    fn go_back(&self);
}

/// Route of the supplier detail view.
pub fn supplier_path(id: &SupplierId) -> String {
    format!("/suppliers/{id}")
}

/// Route of the supplier edit page.
pub fn supplier_edit_path(id: &SupplierId) -> String {
    format!("/suppliers/{id}/edit")
}

/// Extracts the `id` parameter from a `/suppliers/{id}/edit` route.
///
/// Returns `Ok(None)` when the path does not carry an identifier, which the
/// page treats as "nothing to load".
pub fn parse_edit_route(path: &str) -> Result<Option<SupplierId>, TypeConstraintError> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        ["suppliers", id, "edit"] if !id.trim().is_empty() => SupplierId::new(*id).map(Some),
        _ => Ok(None),
    }
}
