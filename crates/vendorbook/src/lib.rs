//! # Vendorbook
//!
//! An in-memory vendor directory for a small-business management app.
//!
//! The directory owns an ordered list of supplier contacts and exposes
//! case-insensitive search plus validated create, update and delete.
//! Nothing is persisted: a directory lives as long as its owner and is
//! seeded with a fixed vendor set on construction.
//!
//! ## Architecture
//!
//! - **Records**: [`VendorRecord`], its [`VendorId`] and the editable
//!   [`VendorDraft`]
//! - **Directory**: [`VendorDirectory`] and its [`VendorFilter`]
//! - **Shell**: a command interpreter playing the list/form screens,
//!   used by the `vendorbook` binary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod directory;
pub mod error;
pub mod record;
pub mod shell;

// Re-export main types
pub use config::DirectoryConfig;
pub use directory::{seed_vendors, VendorDirectory, VendorFilter};
pub use error::{DirectoryError, Result};
pub use record::{VendorDraft, VendorId, VendorRecord};
pub use shell::{Command, Outcome, Shell, ShellError};

/// Vendorbook version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
