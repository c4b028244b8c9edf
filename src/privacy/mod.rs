//! Privacy transforms for generated records.
//!
//! Two transforms are available:
//! - `mask_pii`: partial masking that keeps some visible structure
//! - `anonymize`: salted SHA256 tokens, deterministic for a given salt
//!
//! Both return a new value and leave the input untouched. They are illustrative
//! and do not give compliance-grade privacy guarantees.

mod hash;
mod mask;

pub use hash::anonymize_value;
pub use mask::{mask_email, mask_name, mask_phone};

use crate::error::Result;
use crate::model::{Dataset, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Salt used by `anonymize` when none is configured.
pub const DEFAULT_SALT: &str = "qa-test";

/// PII fields a record may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiiField {
    Email,
    Phone,
    Name,
    Address,
}

impl PiiField {
    /// Fields replaced by `anonymize`.
    pub const ANONYMIZED: [PiiField; 4] = [
        PiiField::Email,
        PiiField::Phone,
        PiiField::Name,
        PiiField::Address,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PiiField::Email => "email",
            PiiField::Phone => "phone",
            PiiField::Name => "name",
            PiiField::Address => "address",
        }
    }
}

impl fmt::Display for PiiField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A record with addressable PII fields.
pub trait Pii: Clone {
    /// The field's value as a string, or `None` if the record has no such field.
    fn pii_value(&self, field: PiiField) -> Option<String>;

    /// Replace the field's value. Records without the field ignore the call.
    fn set_pii_value(&mut self, field: PiiField, value: String);
}

impl Pii for User {
    fn pii_value(&self, field: PiiField) -> Option<String> {
        match field {
            PiiField::Email => Some(self.email.clone()),
            PiiField::Phone => Some(self.phone.clone()),
            PiiField::Name => Some(self.name.clone()),
            PiiField::Address => None,
        }
    }

    fn set_pii_value(&mut self, field: PiiField, value: String) {
        match field {
            PiiField::Email => self.email = value,
            PiiField::Phone => self.phone = value,
            PiiField::Name => self.name = value,
            PiiField::Address => {}
        }
    }
}

/// A loosely-shaped record (JSON object), for data that did not come from the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Non-string values are read in their JSON text form before masking or
/// hashing: `true` becomes `"true"`, `null` becomes `"null"`, `42` becomes `"42"`.
/// The transformed value is always written back as a JSON string.
impl Pii for Record {
    fn pii_value(&self, field: PiiField) -> Option<String> {
        self.0.get(field.key()).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    fn set_pii_value(&mut self, field: PiiField, value: String) {
        if let Some(slot) = self.0.get_mut(field.key()) {
            *slot = Value::String(value);
        }
    }
}

/// Mask email, phone and name. Other fields pass through.
///
/// Fails if an email does not contain exactly one `@` or a phone is shorter
/// than six characters.
pub fn mask_pii<T: Pii>(record: &T) -> Result<T> {
    let mut masked = record.clone();

    if let Some(email) = record.pii_value(PiiField::Email) {
        masked.set_pii_value(PiiField::Email, mask_email(&email)?);
    }
    if let Some(phone) = record.pii_value(PiiField::Phone) {
        masked.set_pii_value(PiiField::Phone, mask_phone(&phone)?);
    }
    if let Some(name) = record.pii_value(PiiField::Name) {
        masked.set_pii_value(PiiField::Name, mask_name(&name));
    }

    Ok(masked)
}

/// Replace every present PII field with `anon_` + 12 hex chars of SHA256(value + salt).
pub fn anonymize<T: Pii>(record: &T, salt: &str) -> T {
    let mut anonymized = record.clone();
    for field in PiiField::ANONYMIZED {
        if let Some(value) = record.pii_value(field) {
            anonymized.set_pii_value(field, anonymize_value(&value, salt));
        }
    }
    anonymized
}

impl Dataset {
    /// Copy with every user masked. Products and orders are unchanged.
    pub fn masked(&self) -> Result<Dataset> {
        let users = self.users.iter().map(mask_pii).collect::<Result<Vec<_>>>()?;
        Ok(Dataset {
            users,
            products: self.products.clone(),
            orders: self.orders.clone(),
        })
    }

    /// Copy with every user anonymized. Products and orders are unchanged.
    pub fn anonymized(&self, salt: &str) -> Dataset {
        Dataset {
            users: self.users.iter().map(|u| anonymize(u, salt)).collect(),
            products: self.products.clone(),
            orders: self.orders.clone(),
        }
    }
}
