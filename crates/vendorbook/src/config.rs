//! Directory construction settings

/// Configuration for building a [`VendorDirectory`](crate::VendorDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Load the fixed seed vendors on construction
    pub seed: bool,

    /// First id handed out by the id counter
    pub first_id: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed: true,
            first_id: 1,
        }
    }
}

impl DirectoryConfig {
    /// Create a config with default settings (seeded, ids from 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for an empty directory.
    pub fn empty() -> Self {
        Self {
            seed: false,
            ..Default::default()
        }
    }

    /// Set whether the seed vendors are loaded.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Set the first id the counter hands out.
    pub fn with_first_id(mut self, first_id: u64) -> Self {
        self.first_id = first_id;
        self
    }
}
