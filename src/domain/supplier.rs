use serde::Deserialize;

/// Server-owned supplier entity as returned by the details endpoint.
///
/// Only the editable fields are modelled; anything else the server sends is
/// ignored. Every field may be missing or `null`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
}

/// Envelope of `GET /api/suppliers/{id}/details`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SupplierDetails {
    pub supplier: SupplierRecord,
}

impl SupplierDetails {
    #[must_use]
    pub fn new(supplier: SupplierRecord) -> Self {
        Self { supplier }
    }
}
