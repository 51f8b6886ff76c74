//! Mock API implementations for isolating the page in tests.

use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{SupplierReader, SupplierWriter};
use crate::domain::supplier::SupplierDetails;
use crate::domain::types::SupplierId;
use crate::forms::supplier::SupplierEditForm;

mock! {
    pub SupplierApi {}

    impl SupplierReader for SupplierApi {
        fn get_supplier_details(&self, id: &SupplierId) -> ApiResult<SupplierDetails>;
    }

    impl SupplierWriter for SupplierApi {
        fn update_supplier(&self, id: &SupplierId, form: &SupplierEditForm) -> ApiResult<()>;
    }
}
