//! # Command-Line Interface
//!
//! User-facing commands, the console entry wizard and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create the data directory and default config |
//! | `add` | Enter a new contact step by step, with `undo` |
//! | `list` | Indexed list, private details hidden unless `--show-private` |
//! | `view` | One contact in full |
//! | `find` | Contacts whose name matches a keyword |
//! | `delete` | Remove a contact by list index |
//! | `clear` | Remove every contact |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! addressbook --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod wizard;
mod contact;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use wizard::{EntryWizard, WizardError, UNDO_NOTE};
pub use contact::IndexError;
