//! Suppliers. The console never creates or edits these; they arrive through
//! seeding or another tool and are only listed and referenced here.

use serde::Serialize;

use super::id::SupplierId;
use super::{EntityKind, Listed};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSupplier {
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

impl NewSupplier {
    /// A supplier known only by its company name.
    pub fn named(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}

impl Listed for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    fn key(&self) -> i32 {
        self.id.get()
    }

    fn label(&self) -> &str {
        &self.company_name
    }
}
