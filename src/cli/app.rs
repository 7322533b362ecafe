//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::contact;
use super::output::{Output, OutputFormat};
use crate::storage::AddressBook;

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(author, version, about = "Console address book with private contact details")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true, env = "ADDRESSBOOK_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and default config
    Init,

    /// Add a contact step by step (type 'undo' to go back one field)
    Add {
        /// Ask again when a phone, email or address entry has no value
        #[arg(long)]
        strict: bool,
    },

    /// List all contacts with private details hidden
    List {
        /// Include private details
        #[arg(long)]
        show_private: bool,
    },

    /// Show one contact in full, private details included
    View {
        /// Index as shown by `list`
        index: usize,
    },

    /// Find contacts whose name contains any of the keywords
    Find {
        /// Keywords to match against name words (case-insensitive)
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Delete a contact
    Delete {
        /// Index as shown by `list`
        index: usize,
    },

    /// Delete all contacts
    Clear,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Address book starting");

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => AddressBook::default_dir()?,
    };
    output.verbose_ctx("data", &format!("Using data directory: {}", data_dir.display()));

    match cli.command {
        Commands::Init => {
            let book = AddressBook::init(&data_dir)?;
            output.success(&format!("Initialized address book at {}", book.root().display()));
        }
        Commands::Add { strict } => contact::add(&output, &AddressBook::open(&data_dir)?, strict)?,
        Commands::List { show_private } => {
            contact::list(&output, &AddressBook::open(&data_dir)?, show_private)?
        }
        Commands::View { index } => contact::view(&output, &AddressBook::open(&data_dir)?, index)?,
        Commands::Find { keywords } => contact::find(&output, &AddressBook::open(&data_dir)?, &keywords)?,
        Commands::Delete { index } => contact::delete(&output, &AddressBook::open(&data_dir)?, index)?,
        Commands::Clear => contact::clear(&output, &AddressBook::open(&data_dir)?)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
