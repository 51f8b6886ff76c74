//! The supplier edit page: load, edit, validate, submit, cancel.

use std::fmt::{Display, Formatter};

use crate::api::errors::ApiError;
use crate::api::{SupplierReader, SupplierWriter};
use crate::domain::supplier::SupplierDetails;
use crate::domain::types::SupplierId;
use crate::dto::supplier::{
    CANCEL_LABEL, PAGE_TITLE, SUBMIT_LABEL, SupplierEditView, SupplierFieldView,
};
use crate::forms::supplier::{FormValidation, SupplierEditForm, SupplierField, validate};
use crate::notifications::{Notifier, Toast};
use crate::routes::{Navigator, supplier_path};
use crate::services::{ServiceError, ServiceResult};

pub const UPDATE_SUCCESS_TOAST: &str = "Supplier updated successfully";
pub const UPDATE_FAILURE_TOAST: &str = "Failed to update supplier";

/// Lifecycle of one page instance.
///
/// `Idle -> Loading -> Loaded -> Submitting -> (Succeeded | Loaded)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    /// Nothing requested yet; also the resting state without an identifier.
    Idle,
    Loading,
    Loaded,
    Submitting,
    /// Terminal: the page has navigated away.
    Succeeded,
}

impl Display for PageState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageState::Idle => "idle",
            PageState::Loading => "loading",
            PageState::Loaded => "loaded",
            PageState::Submitting => "submitting",
            PageState::Succeeded => "succeeded",
        };
        f.write_str(name)
    }
}

/// Editable view of one supplier addressed by a route identifier.
///
/// Collaborators are passed to each operation; the page only owns its
/// form-state and lifecycle.
#[derive(Debug)]
pub struct SupplierEditPage {
    supplier_id: Option<SupplierId>,
    state: PageState,
    form: SupplierEditForm,
    validation: FormValidation,
}

impl SupplierEditPage {
    /// Mounts the page with an empty form.
    pub fn new(supplier_id: Option<SupplierId>) -> Self {
        Self {
            supplier_id,
            state: PageState::Idle,
            form: SupplierEditForm::default(),
            validation: FormValidation::default(),
        }
    }

    pub fn supplier_id(&self) -> Option<&SupplierId> {
        self.supplier_id.as_ref()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn form(&self) -> &SupplierEditForm {
        &self.form
    }

    /// Field errors from the last rejected submit.
    pub fn validation(&self) -> &FormValidation {
        &self.validation
    }

    /// The form stays hidden while this is true.
    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.state == PageState::Submitting
    }

    /// Fetches the supplier and fills the form.
    ///
    /// Without an identifier nothing is requested. A failed fetch is returned
    /// to the caller but leaves the page in [`PageState::Loading`].
    pub fn load<R>(&mut self, api: &R) -> ServiceResult<()>
    where
        R: SupplierReader + ?Sized,
    {
        let Some(id) = self.supplier_id.clone() else {
            log::info!("No supplier identifier in route, skipping load");
            return Ok(());
        };

        match self.state {
            PageState::Idle | PageState::Loading => {}
            state => return Err(ServiceError::InvalidState(state)),
        }

        self.state = PageState::Loading;
        log::info!("Loading supplier {id}");

        match api.get_supplier_details(&id) {
            Ok(details) => {
                self.on_load_success(details);
                Ok(())
            }
            Err(err) => Err(self.on_load_error(err)),
        }
    }

    /// Copies the six editable fields into the form, discarding any edits.
    ///
    /// A response arriving while an update is in flight or after the page was
    /// left is ignored.
    pub fn on_load_success(&mut self, details: SupplierDetails) {
        match self.state {
            PageState::Submitting => {
                log::debug!("Ignoring supplier details while an update is in flight");
                return;
            }
            PageState::Succeeded => {
                log::debug!("Ignoring supplier details after the page was left");
                return;
            }
            _ => {}
        }
        self.form = SupplierEditForm::from(&details.supplier);
        self.validation = FormValidation::default();
        self.state = PageState::Loaded;
    }

    /// Records a failed fetch. There is no error view; the page keeps loading.
    pub fn on_load_error(&self, err: ApiError) -> ServiceError {
        log::error!("Failed to fetch supplier: {err}");
        ServiceError::Fetch(err)
    }

    /// Applies a user edit to one field.
    ///
    /// Once a submit has been rejected, every edit re-runs validation so stale
    /// messages disappear as the user fixes them.
    pub fn set_field(&mut self, field: SupplierField, value: impl Into<String>) -> ServiceResult<()> {
        match self.state {
            PageState::Idle | PageState::Loaded => {}
            state => return Err(ServiceError::InvalidState(state)),
        }

        self.form.set(field, value);
        if !self.validation.is_valid() {
            self.validation = validate(&self.form);
        }
        Ok(())
    }

    /// Validates and sends the form.
    ///
    /// Invalid input never reaches the API. On success a confirmation toast is
    /// shown and the router moves to the supplier detail view; on failure a
    /// destructive toast is shown and the form is left as it was.
    pub fn submit<A, N, T>(&mut self, api: &A, navigator: &N, notifier: &T) -> ServiceResult<()>
    where
        A: SupplierWriter + ?Sized,
        N: Navigator + ?Sized,
        T: Notifier + ?Sized,
    {
        match (self.state, &self.supplier_id) {
            (PageState::Loaded, _) | (PageState::Idle, None) => {}
            (state, _) => return Err(ServiceError::InvalidState(state)),
        }

        let validation = validate(&self.form);
        if !validation.is_valid() {
            log::info!("Supplier form rejected: {validation}");
            self.validation = validation.clone();
            return Err(ServiceError::Validation(validation));
        }
        self.validation = validation;

        let id = self
            .supplier_id
            .clone()
            .ok_or(ServiceError::MissingIdentifier)?;

        self.state = PageState::Submitting;
        log::info!("Updating supplier {id}");

        match api.update_supplier(&id, &self.form) {
            Ok(()) => {
                self.on_submit_success(navigator, notifier);
                Ok(())
            }
            Err(err) => Err(self.on_submit_error(err, notifier)),
        }
    }

    pub fn on_submit_success<N, T>(&mut self, navigator: &N, notifier: &T)
    where
        N: Navigator + ?Sized,
        T: Notifier + ?Sized,
    {
        notifier.notify(Toast::success(UPDATE_SUCCESS_TOAST));
        if let Some(id) = &self.supplier_id {
            navigator.navigate(&supplier_path(id));
        }
        self.state = PageState::Succeeded;
    }

    pub fn on_submit_error<T>(&mut self, err: ApiError, notifier: &T) -> ServiceError
    where
        T: Notifier + ?Sized,
    {
        log::error!("Failed to update supplier: {err}");
        notifier.notify(Toast::destructive(UPDATE_FAILURE_TOAST));
        self.state = PageState::Loaded;
        ServiceError::Submit(err)
    }

    /// Leaves the page without saving.
    pub fn cancel<N>(&self, navigator: &N)
    where
        N: Navigator + ?Sized,
    {
        navigator.go_back();
    }

    /// Builds the view-model for the current state. Only the name error is surfaced.
    pub fn view(&self) -> SupplierEditView {
        let fields = SupplierField::ALL
            .into_iter()
            .map(|field| SupplierFieldView {
                key: field.key(),
                label: field.label(),
                value: self.form.get(field).to_string(),
                error: match field {
                    SupplierField::Name => self.validation.error(field).map(str::to_string),
                    _ => None,
                },
            })
            .collect();

        SupplierEditView {
            title: PAGE_TITLE,
            loading: self.is_loading(),
            submitting: self.is_submitting(),
            fields,
            cancel_label: CANCEL_LABEL,
            submit_label: SUBMIT_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::SupplierRecord;

    fn loaded_page() -> SupplierEditPage {
        let mut page = SupplierEditPage::new(Some(SupplierId::new("5").unwrap()));
        page.state = PageState::Loading;
        page.on_load_success(SupplierDetails::new(SupplierRecord {
            name: Some("Acme".to_string()),
            email: Some("a@b.com".to_string()),
            ..SupplierRecord::default()
        }));
        page
    }

    #[test]
    fn load_success_overwrites_edits() {
        let mut page = SupplierEditPage::new(Some(SupplierId::new("5").unwrap()));
        page.set_field(SupplierField::Phone, "draft").unwrap();
        page.state = PageState::Loading;

        page.on_load_success(SupplierDetails::new(SupplierRecord {
            name: Some("Acme".to_string()),
            ..SupplierRecord::default()
        }));

        assert_eq!(page.state(), PageState::Loaded);
        assert_eq!(page.form().name, "Acme");
        assert_eq!(page.form().phone, "");
    }

    #[test]
    fn late_load_is_ignored_while_submitting() {
        let mut page = loaded_page();
        page.set_field(SupplierField::Phone, "556").unwrap();
        page.state = PageState::Submitting;

        page.on_load_success(SupplierDetails::new(SupplierRecord {
            name: Some("Stale".to_string()),
            ..SupplierRecord::default()
        }));

        assert_eq!(page.state(), PageState::Submitting);
        assert_eq!(page.form().name, "Acme");
        assert_eq!(page.form().phone, "556");
    }

    #[test]
    fn late_load_is_ignored_after_success() {
        let mut page = loaded_page();
        page.state = PageState::Succeeded;

        page.on_load_success(SupplierDetails::new(SupplierRecord::default()));

        assert_eq!(page.state(), PageState::Succeeded);
        assert_eq!(page.form().name, "Acme");
    }

    #[test]
    fn load_error_keeps_page_loading() {
        let mut page = SupplierEditPage::new(Some(SupplierId::new("5").unwrap()));
        page.state = PageState::Loading;

        let err = page.on_load_error(ApiError::Status(500));

        assert!(matches!(err, ServiceError::Fetch(ApiError::Status(500))));
        assert!(page.is_loading());
        assert!(page.view().loading);
    }

    #[test]
    fn edits_are_rejected_while_loading() {
        let mut page = SupplierEditPage::new(Some(SupplierId::new("5").unwrap()));
        page.state = PageState::Loading;

        let result = page.set_field(SupplierField::Name, "x");

        assert!(matches!(
            result,
            Err(ServiceError::InvalidState(PageState::Loading))
        ));
    }

    #[test]
    fn view_surfaces_only_name_error() {
        let mut page = loaded_page();
        page.form.name.clear();
        page.form.email = "broken".to_string();
        page.validation = validate(&page.form);

        let view = page.view();

        assert_eq!(view.title, "Edit Supplier");
        assert_eq!(view.fields.len(), 6);
        assert_eq!(view.fields[0].key, "name");
        assert!(view.fields[0].error.is_some());
        assert!(view.fields.iter().skip(1).all(|f| f.error.is_none()));
    }

    #[test]
    fn editing_after_rejection_revalidates() {
        let mut page = loaded_page();
        page.set_field(SupplierField::Name, "").unwrap();
        page.validation = validate(&page.form);
        assert!(!page.validation().is_valid());

        page.set_field(SupplierField::Name, "Acme Ltd").unwrap();

        assert!(page.validation().is_valid());
    }
}
