//! In-memory vendor directory with validated create/update/delete

mod filter;
mod seed;

pub use filter::VendorFilter;
pub use seed::seed_vendors;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::record::{VendorDraft, VendorId, VendorRecord};

/// The ordered collection of vendor records and its operations.
///
/// Records keep insertion order: creates append, updates stay in place and
/// deletes close the gap without reordering the rest. Every mutator
/// validates before touching the collection, so a failed call leaves the
/// directory unchanged.
///
/// # Example
///
/// ```
/// use vendorbook::{VendorDirectory, VendorDraft};
///
/// let mut dir = VendorDirectory::seeded();
/// assert_eq!(dir.list(Some("prov")).len(), 2);
///
/// let created = dir.create(VendorDraft::new("Acme").email("hi@acme.test")).unwrap();
/// assert_eq!(dir.list(None).last(), Some(&&created));
///
/// dir.update(created.id, VendorDraft::new("Acme Ltd")).unwrap();
/// assert_eq!(dir.get(created.id).unwrap().email, None);
///
/// dir.delete(created.id).unwrap();
/// assert!(!dir.contains(created.id));
///
/// assert!(dir.create(VendorDraft::new("  ")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct VendorDirectory {
    /// Records keyed by id, in display order
    records: IndexMap<VendorId, VendorRecord>,

    /// Next id to hand out; only ever grows, `None` once `u64::MAX` is used
    next_id: Option<u64>,
}

impl Default for VendorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::empty())
    }

    /// Create a directory from explicit settings.
    pub fn with_config(config: DirectoryConfig) -> Self {
        let mut dir = Self {
            records: IndexMap::new(),
            next_id: Some(config.first_id),
        };
        if config.seed {
            dir.load_seed();
        }
        dir
    }

    // ═══════════════════════════════════════════════════════════════════
    // Reads
    // ═══════════════════════════════════════════════════════════════════

    /// List records in order, optionally narrowed by search text.
    ///
    /// With no text (or empty text) every record is returned. Otherwise a
    /// record is kept when its name or email contains the text, ignoring
    /// case.
    pub fn list(&self, filter_text: Option<&str>) -> Vec<&VendorRecord> {
        let filter = VendorFilter::new(filter_text);
        self.records
            .values()
            .filter(|r| filter.matches(r))
            .collect()
    }

    /// Iterate the records accepted by `filter`, in order.
    pub fn search<'a>(
        &'a self,
        filter: &'a VendorFilter,
    ) -> impl Iterator<Item = &'a VendorRecord> + 'a {
        self.records.values().filter(move |r| filter.matches(r))
    }

    /// Look up a record by id.
    pub fn get(&self, id: VendorId) -> Option<&VendorRecord> {
        self.records.get(&id)
    }

    /// Check whether a record with `id` exists.
    pub fn contains(&self, id: VendorId) -> bool {
        self.records.contains_key(&id)
    }

    /// Position of a record in display order.
    pub fn position(&self, id: VendorId) -> Option<usize> {
        self.records.get_index_of(&id)
    }

    /// Iterate all records in order.
    pub fn iter(&self) -> impl Iterator<Item = &VendorRecord> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Create a record from `draft` and append it.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty after trimming
    /// - `IdsExhausted` if the id counter has run out
    pub fn create(&mut self, draft: VendorDraft) -> Result<VendorRecord> {
        let draft = draft.validate().inspect_err(|err| {
            debug!(%err, "rejected vendor create");
        })?;

        let id = self.allocate_id().inspect_err(|err| {
            debug!(%err, "rejected vendor create");
        })?;
        let record = VendorRecord::from_draft(id, draft);
        self.records.insert(id, record.clone());

        debug!(%id, name = %record.name, "created vendor");
        Ok(record)
    }

    /// Replace every field of record `id` except the id itself.
    ///
    /// The record keeps its position.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has this id
    /// - `Validation` if the new name is empty after trimming
    pub fn update(&mut self, id: VendorId, draft: VendorDraft) -> Result<VendorRecord> {
        let Some(record) = self.records.get_mut(&id) else {
            debug!(%id, "rejected update of unknown vendor");
            return Err(DirectoryError::NotFound { id });
        };

        let draft = draft.validate().inspect_err(|err| {
            debug!(%id, %err, "rejected vendor update");
        })?;

        record.apply(draft);
        debug!(%id, name = %record.name, "updated vendor");
        Ok(record.clone())
    }

    /// Remove record `id`. Remaining records keep their relative order.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has this id
    pub fn delete(&mut self, id: VendorId) -> Result<()> {
        match self.records.shift_remove(&id) {
            Some(record) => {
                debug!(%id, name = %record.name, "deleted vendor");
                Ok(())
            }
            None => {
                debug!(%id, "rejected delete of unknown vendor");
                Err(DirectoryError::NotFound { id })
            }
        }
    }

    fn allocate_id(&mut self) -> Result<VendorId> {
        let raw = self.next_id.ok_or(DirectoryError::IdsExhausted {
            last: VendorId::new(u64::MAX),
        })?;
        self.next_id = raw.checked_add(1);
        Ok(VendorId::new(raw))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Snapshot
    // ═══════════════════════════════════════════════════════════════════

    /// Copy of all records in order.
    pub fn snapshot(&self) -> Vec<VendorRecord> {
        self.records.values().cloned().collect()
    }

    /// Render the ordered records as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<&VendorRecord> = self.records.values().collect();
        serde_json::to_string_pretty(&records)
    }
}

impl<'a> IntoIterator for &'a VendorDirectory {
    type Item = &'a VendorRecord;
    type IntoIter = indexmap::map::Values<'a, VendorId, VendorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
