//! Shell command parsing

use std::str::FromStr;

use super::ShellError;
use crate::record::{VendorDraft, VendorId};

/// An editable vendor field, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `name=`
    Name,
    /// `email=`
    Email,
    /// `phone=`
    Phone,
    /// `address=`
    Address,
}

impl FromStr for Field {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "address" => Ok(Field::Address),
            _ => Err(ShellError::UnknownField(s.to_string())),
        }
    }
}

/// Field assignments in command order; later ones win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChanges(Vec<(Field, String)>);

impl FieldChanges {
    /// Parse `field=value` tokens.
    pub fn parse<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, ShellError> {
        tokens
            .into_iter()
            .map(|token| {
                let (field, value) = token
                    .split_once('=')
                    .ok_or_else(|| ShellError::MalformedField(token.to_string()))?;
                let field: Field = field.parse()?;
                Ok((field, value.to_string()))
            })
            .collect::<Result<Vec<_>, ShellError>>()
            .map(Self)
    }

    /// Whether no field is assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay these assignments on `draft`.
    ///
    /// An empty value clears an optional field once the draft is validated.
    pub fn apply_to(&self, mut draft: VendorDraft) -> VendorDraft {
        for (field, value) in &self.0 {
            let value = value.clone();
            match field {
                Field::Name => draft.name = value,
                Field::Email => draft.email = Some(value),
                Field::Phone => draft.phone = Some(value),
                Field::Address => draft.address = Some(value),
            }
        }
        draft
    }
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `list [text]`
    List(Option<String>),
    /// `show <id>`
    Show(VendorId),
    /// `add field=value...`
    Add(FieldChanges),
    /// `edit <id> field=value...`
    Edit {
        /// Record to edit
        id: VendorId,
        /// Fields to replace
        changes: FieldChanges,
    },
    /// `rm <id>` / `delete <id>`
    Delete(VendorId),
    /// `export`
    Export,
    /// `help`
    Help,
    /// `quit`
    Quit,
    /// Blank line
    Empty,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (typed, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if typed.is_empty() {
            return Ok(Command::Empty);
        }
        let verb = typed.to_ascii_lowercase();

        // search text is matched as typed, so it skips the tokenizer
        if matches!(verb.as_str(), "list" | "ls") {
            return Ok(Command::List(filter_text(rest)));
        }

        let tokens = tokenize(rest)?;
        let mut tokens = tokens.iter().map(String::as_str);

        match verb.as_str() {
            "show" => Ok(Command::Show(parse_id("show", tokens.next())?)),
            "add" => Ok(Command::Add(FieldChanges::parse(tokens)?)),
            "edit" => {
                let id = parse_id("edit", tokens.next())?;
                let changes = FieldChanges::parse(tokens)?;
                Ok(Command::Edit { id, changes })
            }
            "rm" => Ok(Command::Delete(parse_id("rm", tokens.next())?)),
            "delete" => Ok(Command::Delete(parse_id("delete", tokens.next())?)),
            "export" => Ok(Command::Export),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ShellError::UnknownCommand(typed.to_string())),
        }
    }
}

/// The rest of a `list` line, unchanged apart from the separator after the
/// verb. One pair of surrounding double quotes is stripped.
fn filter_text(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    let text = rest
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(rest);
    (!text.is_empty()).then(|| text.to_string())
}

fn parse_id(command: &'static str, token: Option<&str>) -> Result<VendorId, ShellError> {
    let token = token.ok_or(ShellError::MissingArgument {
        command,
        argument: "id",
    })?;
    token
        .parse()
        .map_err(|_| ShellError::InvalidId(token.to_string()))
}

/// Split a line on whitespace; double quotes group (and are stripped).
///
/// `name="Proveedor C"` yields the single token `name=Proveedor C`.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ShellError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
