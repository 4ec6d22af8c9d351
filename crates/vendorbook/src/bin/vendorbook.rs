//! Interactive vendor directory shell

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use vendorbook::{DirectoryConfig, Outcome, Shell, VendorDirectory};

/// Manage an in-memory vendor directory.
#[derive(Parser, Debug)]
#[command(name = "vendorbook", version, about)]
struct Args {
    /// Start without the seed vendors
    #[arg(long)]
    empty: bool,

    /// First id handed out to new vendors
    #[arg(long, value_name = "N")]
    first_id: Option<u64>,

    /// Log every directory operation
    #[arg(short, long)]
    verbose: bool,

    /// Run these commands and exit instead of starting the prompt
    #[arg(short, long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

impl Args {
    fn directory_config(&self) -> DirectoryConfig {
        let config = DirectoryConfig::new().with_seed(!self.empty);
        match self.first_id {
            Some(first_id) => config.with_first_id(first_id),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut shell = Shell::new(VendorDirectory::with_config(args.directory_config()));

    if !args.commands.is_empty() {
        for line in &args.commands {
            if !run(&mut shell, line) {
                break;
            }
        }
        return Ok(());
    }

    println!("vendorbook {} (type `help` for commands)", vendorbook::VERSION);
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("vendors> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if !run(&mut shell, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Run one line, printing its output. Returns false when the session ends.
fn run(shell: &mut Shell, line: &str) -> bool {
    match shell.run_line(line) {
        Ok(Outcome::Output(text)) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            true
        }
        Ok(Outcome::Quit) => false,
        Err(err) => {
            eprintln!("error: {}", err);
            true
        }
    }
}
