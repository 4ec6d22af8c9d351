//! Fixed seed vendors loaded on start

use tracing::{info, warn};

use super::VendorDirectory;
use crate::record::VendorDraft;

/// The seed vendors, in load order.
pub fn seed_vendors() -> Vec<VendorDraft> {
    vec![
        VendorDraft::new("Proveedor A")
            .email("proveedora@example.com")
            .phone("555-0101")
            .address("Calle Mayor 1"),
        VendorDraft::new("Proveedor B")
            .email("proveedorb@example.com")
            .phone("555-0102")
            .address("Avenida Central 22"),
    ]
}

impl VendorDirectory {
    /// Create a directory holding the seed vendors.
    pub fn seeded() -> Self {
        Self::with_config(Default::default())
    }

    /// Append the seed vendors to this directory.
    ///
    /// Seeding goes through [`create`](Self::create), so seed records get
    /// ordinary counter ids.
    pub fn load_seed(&mut self) {
        for draft in seed_vendors() {
            if let Err(err) = self.create(draft) {
                warn!(%err, "skipping seed vendor");
            }
        }
        info!(count = self.len(), "seeded vendor directory");
    }
}
