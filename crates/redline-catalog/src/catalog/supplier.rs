//! Supplier contact records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Region a supplier ships from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United States.
    US,
    /// European Union.
    EU,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::US => "US",
            Region::EU => "EU",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A supplier contact record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    /// Display name; products refer to suppliers by this value.
    pub name: String,
    /// Contact email address.
    pub contact: String,
    /// Shipping region.
    pub region: Region,
}

/// Borrowed supplier row, as written in the embedded table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SupplierRow {
    pub name: &'static str,
    pub contact: &'static str,
    pub region: Region,
}

impl From<&SupplierRow> for Supplier {
    fn from(row: &SupplierRow) -> Self {
        Self {
            name: row.name.to_string(),
            contact: row.contact.to_string(),
            region: row.region,
        }
    }
}
