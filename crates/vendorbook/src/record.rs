//! Vendor record types

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// Unique, immutable identifier of a vendor record.
///
/// Ids are handed out by the owning directory from a monotonic counter
/// and are never reused, even after the record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(u64);

impl VendorId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VendorId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

impl From<u64> for VendorId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The editable fields of a vendor, as supplied by a form.
///
/// # Example
///
/// ```
/// use vendorbook::VendorDraft;
///
/// let draft = VendorDraft::new("Proveedor C")
///     .email("c@example.com")
///     .phone("555-0103");
///
/// assert_eq!(draft.name, "Proveedor C");
/// assert_eq!(draft.address, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorDraft {
    /// Display name (required)
    pub name: String,

    /// Contact email, not format-checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl VendorDraft {
    /// Start a draft with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Check invariants and return the normalized draft.
    ///
    /// The name is trimmed and must not be empty. Optional fields are
    /// trimmed and dropped when blank.
    pub fn validate(self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DirectoryError::validation("name", "must not be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            email: normalize_optional(self.email),
            phone: normalize_optional(self.phone),
            address: normalize_optional(self.address),
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A vendor (supplier contact) held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Assigned at creation, never changes
    pub id: VendorId,

    /// Display name, never empty
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl VendorRecord {
    /// Build a record from an already validated draft.
    pub(crate) fn from_draft(id: VendorId, draft: VendorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
        }
    }

    /// Replace every field except the id with the (validated) draft.
    pub(crate) fn apply(&mut self, draft: VendorDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.address = draft.address;
    }

    /// The editable fields of this record, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> VendorDraft {
        VendorDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

impl fmt::Display for VendorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)?;
        if let Some(email) = &self.email {
            write!(f, " <{}>", email)?;
        }
        if let Some(phone) = &self.phone {
            write!(f, " tel: {}", phone)?;
        }
        if let Some(address) = &self.address {
            write!(f, " addr: {}", address)?;
        }
        Ok(())
    }
}
