//! Customer record

use serde::{Deserialize, Serialize};

use super::CustomerId;

/// A roster entry. Persisted as `id,name,contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "crate::model::trimmed_number")]
    pub id: CustomerId,
    pub name: String,
    pub contact: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
        }
    }
}
