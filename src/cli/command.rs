use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_FILE: &str = "contacts.txt";

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Text file the contacts are loaded from and saved to
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove every contact with this name (case-insensitive)
    Remove {
        #[arg(long)]
        name: String,
    },
    /// Search contacts by exact name (case-insensitive)
    Search {
        #[arg(long)]
        name: String,
    },
    /// List contacts in the order they were added
    List,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path or directory for the export file
        #[arg(short, long)]
        des: PathBuf,
    },
}

impl Commands {
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. } | Commands::Remove { .. } | Commands::Import { .. }
        )
    }
}
