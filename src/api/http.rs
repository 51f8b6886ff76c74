//! Blocking `reqwest` adapter for the supplier endpoints.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{SupplierReader, SupplierWriter, details_path, edit_path};
use crate::domain::supplier::SupplierDetails;
use crate::domain::types::SupplierId;
use crate::forms::supplier::SupplierEditForm;

/// Talks to the supplier API over HTTP.
///
/// Requests are one-shot: no retries and no timeout.
#[derive(Clone, Debug)]
pub struct HttpSupplierApi {
    client: Client,
    base_url: String,
}

impl HttpSupplierApi {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SupplierReader for HttpSupplierApi {
    fn get_supplier_details(&self, id: &SupplierId) -> ApiResult<SupplierDetails> {
        let url = self.url(&details_path(id));
        log::debug!("GET {url}");

        let response = self.client.get(&url).send()?.error_for_status()?;

        response
            .json::<SupplierDetails>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl SupplierWriter for HttpSupplierApi {
    fn update_supplier(&self, id: &SupplierId, form: &SupplierEditForm) -> ApiResult<()> {
        let url = self.url(&edit_path(id));
        log::debug!("POST {url}");

        self.client.post(&url).json(form).send()?.error_for_status()?;

        Ok(())
    }
}
