//! Line-oriented shell over a vendor directory
//!
//! The shell stands in for the list and form screens: it feeds search text
//! to [`VendorDirectory::list`], turns `field=value` input into drafts and
//! reports rejected operations back as messages.

mod command;

pub use command::{tokenize, Command, Field, FieldChanges};

use thiserror::Error;

use crate::directory::VendorDirectory;
use crate::error::DirectoryError;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  list [text]                 list vendors whose name/email contains text,
                              matched as typed (spaces included)
  show <id>                   show one vendor
  add name=<v> [email=<v>] [phone=<v>] [address=<v>]
                              create a vendor
  edit <id> [field=<v>...]    change fields; others keep their values
  rm <id> | delete <id>       delete a vendor
  export                      print all vendors as JSON
  help                        show this text
  quit                        leave

Quote values containing spaces: name=\"Proveedor C\"";

/// Errors raised while parsing or running a shell command.
#[derive(Error, Debug)]
pub enum ShellError {
    /// First word is not a command
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    /// A required argument was not given
    #[error("Missing argument: {command} needs <{argument}>")]
    MissingArgument {
        /// The command
        command: &'static str,
        /// The argument it lacks
        argument: &'static str,
    },

    /// Argument is not a vendor id
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Assignment names no vendor field
    #[error("Unknown field: {0} (expected name, email, phone or address)")]
    UnknownField(String),

    /// Token is not `field=value`
    #[error("Expected field=value, got: {0}")]
    MalformedField(String),

    /// Line ends inside a quoted value
    #[error("Unterminated quote")]
    UnterminatedQuote,

    /// The directory rejected the operation
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Snapshot could not be rendered
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text (may be empty)
    Output(String),
    /// End the session
    Quit,
}

/// Owns a directory and runs commands against it.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    directory: VendorDirectory,
}

impl Shell {
    /// Create a shell around `directory`.
    pub fn new(directory: VendorDirectory) -> Self {
        Self { directory }
    }

    /// The directory being edited.
    pub fn directory(&self) -> &VendorDirectory {
        &self.directory
    }

    /// Give back the directory.
    pub fn into_directory(self) -> VendorDirectory {
        self.directory
    }

    /// Parse and run one line.
    pub fn run_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, ShellError> {
        let output = match command {
            Command::List(filter) => {
                let records = self.directory.list(filter.as_deref());
                if records.is_empty() {
                    "No vendors found".to_string()
                } else {
                    records
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Show(id) => self
                .directory
                .get(id)
                .ok_or(DirectoryError::NotFound { id })?
                .to_string(),
            Command::Add(changes) => {
                let record = self.directory.create(changes.apply_to(Default::default()))?;
                format!("Created {}", record)
            }
            Command::Edit { id, changes } => {
                let current = self
                    .directory
                    .get(id)
                    .ok_or(DirectoryError::NotFound { id })?
                    .to_draft();
                let record = self.directory.update(id, changes.apply_to(current))?;
                format!("Updated {}", record)
            }
            Command::Delete(id) => {
                self.directory.delete(id)?;
                format!("Deleted #{}", id)
            }
            Command::Export => self.directory.to_json()?,
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Empty => String::new(),
        };
        Ok(Outcome::Output(output))
    }
}
