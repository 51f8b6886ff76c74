use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::supplier::SupplierRecord;
use crate::forms::FormError;

pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Client-side draft of the editable supplier fields.
///
/// Serialized verbatim as the body of the update request.
pub struct SupplierEditForm {
    /// Display name, the only required field.
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    /// Contact email; checked only when non-blank.
    #[validate(custom(function = "validate_optional_email"))]
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub payment_terms: String,
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || email.to_string().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE)))
    }
}

impl From<&SupplierRecord> for SupplierEditForm {
    /// Projects the editable fields of a fetched record; missing values become empty text.
    fn from(record: &SupplierRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: text(&record.name),
            contact_person: text(&record.contact_person),
            email: text(&record.email),
            phone: text(&record.phone),
            address: text(&record.address),
            payment_terms: text(&record.payment_terms),
        }
    }
}

impl SupplierEditForm {
    /// Current value of a single field.
    pub fn get(&self, field: SupplierField) -> &str {
        match field {
            SupplierField::Name => &self.name,
            SupplierField::ContactPerson => &self.contact_person,
            SupplierField::Email => &self.email,
            SupplierField::Phone => &self.phone,
            SupplierField::Address => &self.address,
            SupplierField::PaymentTerms => &self.payment_terms,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, field: SupplierField, value: impl Into<String>) {
        let slot = match field {
            SupplierField::Name => &mut self.name,
            SupplierField::ContactPerson => &mut self.contact_person,
            SupplierField::Email => &mut self.email,
            SupplierField::Phone => &mut self.phone,
            SupplierField::Address => &mut self.address,
            SupplierField::PaymentTerms => &mut self.payment_terms,
        };
        *slot = value.into();
    }
}

/// The six editable inputs of the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupplierField {
    Name,
    ContactPerson,
    Email,
    Phone,
    Address,
    PaymentTerms,
}

impl SupplierField {
    pub const ALL: [SupplierField; 6] = [
        SupplierField::Name,
        SupplierField::ContactPerson,
        SupplierField::Email,
        SupplierField::Phone,
        SupplierField::Address,
        SupplierField::PaymentTerms,
    ];

    /// Wire name used in JSON payloads.
    pub const fn key(self) -> &'static str {
        match self {
            SupplierField::Name => "name",
            SupplierField::ContactPerson => "contactPerson",
            SupplierField::Email => "email",
            SupplierField::Phone => "phone",
            SupplierField::Address => "address",
            SupplierField::PaymentTerms => "paymentTerms",
        }
    }

    /// Human readable input label.
    pub const fn label(self) -> &'static str {
        match self {
            SupplierField::Name => "Name",
            SupplierField::ContactPerson => "Contact Person",
            SupplierField::Email => "Email",
            SupplierField::Phone => "Phone",
            SupplierField::Address => "Address",
            SupplierField::PaymentTerms => "Payment Terms",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            SupplierField::Name => NAME_REQUIRED_MESSAGE,
            SupplierField::Email => INVALID_EMAIL_MESSAGE,
            _ => "Invalid value",
        }
    }
}

impl Display for SupplierField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SupplierField {
    type Err = FormError;

    /// Accepts both the wire name and the Rust field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SupplierField::Name),
            "contactPerson" | "contact_person" => Ok(SupplierField::ContactPerson),
            "email" => Ok(SupplierField::Email),
            "phone" => Ok(SupplierField::Phone),
            "address" => Ok(SupplierField::Address),
            "paymentTerms" | "payment_terms" => Ok(SupplierField::PaymentTerms),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Outcome of [`validate`]: one message per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<SupplierField, String>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message attached to `field`, if it failed validation.
    pub fn error(&self, field: SupplierField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (SupplierField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Display for FormValidation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl From<ValidationErrors> for FormValidation {
    fn from(errors: ValidationErrors) -> Self {
        let mut result = BTreeMap::new();
        for (key, field_errors) in errors.field_errors() {
            let Ok(field) = key.parse::<SupplierField>() else {
                log::warn!("Ignoring validation error for unknown field {key}");
                continue;
            };
            let message = field_errors
                .iter()
                .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| field.default_message().to_string());
            result.insert(field, message);
        }
        Self { errors: result }
    }
}

/// Checks the form against the supplier schema.
///
/// `name` must be non-empty; `email` must be a valid address when non-blank;
/// every other field is unconstrained.
pub fn validate(form: &SupplierEditForm) -> FormValidation {
    match form.validate() {
        Ok(()) => FormValidation::default(),
        Err(errors) => errors.into(),
    }
}
