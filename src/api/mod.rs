//! Ports to the supplier HTTP API and their adapters.

use crate::{
    api::errors::ApiResult,
    domain::{supplier::SupplierDetails, types::SupplierId},
    forms::supplier::SupplierEditForm,
};

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Path of the read endpoint for `id`, relative to the API origin.
pub fn details_path(id: &SupplierId) -> String {
    format!("/api/suppliers/{id}/details")
}

/// Path of the update endpoint for `id`, relative to the API origin.
pub fn edit_path(id: &SupplierId) -> String {
    format!("/api/suppliers/{id}/edit")
}

pub trait SupplierReader {
    fn get_supplier_details(&self, id: &SupplierId) -> ApiResult<SupplierDetails>;
}

pub trait SupplierWriter {
    /// Sends the full form; the response body carries no information beyond success.
    fn update_supplier(&self, id: &SupplierId, form: &SupplierEditForm) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_embed_identifier() {
        let id = SupplierId::new("17").unwrap();
        assert_eq!(details_path(&id), "/api/suppliers/17/details");
        assert_eq!(edit_path(&id), "/api/suppliers/17/edit");
    }
}
