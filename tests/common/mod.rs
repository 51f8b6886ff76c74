//! Recording fakes of the page collaborators.

use std::cell::{Cell, RefCell};

use supplier_edit::api::errors::{ApiError, ApiResult};
use supplier_edit::api::{SupplierReader, SupplierWriter, details_path, edit_path};
use supplier_edit::domain::supplier::{SupplierDetails, SupplierRecord};
use supplier_edit::domain::types::SupplierId;
use supplier_edit::forms::supplier::SupplierEditForm;
use supplier_edit::notifications::{Notifier, Toast};
use supplier_edit::routes::Navigator;

/// Serves a fixed record and answers updates with a fixed status.
pub struct TestSupplierApi {
    record: SupplierRecord,
    fail_updates_with: Cell<Option<u16>>,
    pub reads: RefCell<Vec<String>>,
    pub writes: RefCell<Vec<(String, serde_json::Value)>>,
}

impl TestSupplierApi {
    pub fn new(record: SupplierRecord) -> Self {
        Self {
            record,
            fail_updates_with: Cell::new(None),
            reads: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_updates(self, status: u16) -> Self {
        self.fail_updates_with.set(Some(status));
        self
    }
}

impl SupplierReader for TestSupplierApi {
    fn get_supplier_details(&self, id: &SupplierId) -> ApiResult<SupplierDetails> {
        self.reads.borrow_mut().push(details_path(id));
        Ok(SupplierDetails::new(self.record.clone()))
    }
}

impl SupplierWriter for TestSupplierApi {
    fn update_supplier(&self, id: &SupplierId, form: &SupplierEditForm) -> ApiResult<()> {
        let body = serde_json::to_value(form).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.writes.borrow_mut().push((edit_path(id), body));
        match self.fail_updates_with.get() {
            Some(status) => Err(ApiError::Status(status)),
            None => Ok(()),
        }
    }
}

/// Read endpoint that always answers with a server error.
pub struct BrokenSupplierApi;

impl SupplierReader for BrokenSupplierApi {
    fn get_supplier_details(&self, _id: &SupplierId) -> ApiResult<SupplierDetails> {
        Err(ApiError::Status(404))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
    pub backs: Cell<usize>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }

    fn go_back(&self) {
        self.backs.set(self.backs.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub fn acme() -> SupplierRecord {
    SupplierRecord {
        name: Some("Acme".to_string()),
        contact_person: Some("Jo".to_string()),
        email: Some("a@b.com".to_string()),
        phone: Some("555".to_string()),
        address: Some("1 Rd".to_string()),
        payment_terms: Some("Net30".to_string()),
    }
}
