//! Case-insensitive search filter

use crate::record::VendorRecord;

/// Matches vendors whose name or email contains a needle, ignoring case.
///
/// An empty or absent filter matches every record.
///
/// # Example
///
/// ```
/// use vendorbook::VendorFilter;
///
/// assert!(VendorFilter::new(None).is_empty());
/// assert!(VendorFilter::new(Some("")).is_empty());
/// assert!(!VendorFilter::new(Some("prov")).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilter {
    needle: Option<String>,
}

impl VendorFilter {
    /// Build a filter from optional search text.
    pub fn new(text: Option<&str>) -> Self {
        Self {
            needle: text.filter(|t| !t.is_empty()).map(str::to_lowercase),
        }
    }

    /// A filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether this filter matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Check a single record against the filter.
    pub fn matches(&self, record: &VendorRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        contains_folded(&record.name, needle)
            || record
                .email
                .as_deref()
                .is_some_and(|email| contains_folded(email, needle))
    }
}

impl From<&str> for VendorFilter {
    fn from(text: &str) -> Self {
        Self::new(Some(text))
    }
}

impl From<Option<&str>> for VendorFilter {
    fn from(text: Option<&str>) -> Self {
        Self::new(text)
    }
}

// `needle` is already lowercased
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
