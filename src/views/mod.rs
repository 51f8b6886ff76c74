//! Terminal front end of the supplier edit page.

use tera::{Context, Tera};

use crate::dto::supplier::SupplierEditView;

pub mod prompt;

const EDIT_TEMPLATE: &str = include_str!("../../templates/supplier/edit.txt");

/// Renders the page view-model as plain text.
pub fn render_edit_page(view: &SupplierEditView) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("page", view);
    Tera::one_off(EDIT_TEMPLATE, &context, false)
}
