use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(about = "Command-line catalog of art records kept in a single JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog file
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a record to the catalog
    #[command(alias = "a")]
    Add {
        title: String,

        /// Year of the work (must be an integer)
        year: String,

        artist: String,

        style: String,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Search records by exact field value
    #[command(alias = "s")]
    Search {
        /// Field to match: id, title, year, artist or style
        field: String,

        /// Value the field must equal exactly
        value: String,
    },

    /// Edit the record with the given id
    #[command(alias = "e")]
    Edit {
        id: String,

        title: String,

        /// Year of the work (must be an integer)
        year: String,

        artist: String,

        style: String,
    },

    /// Delete the record matching title, year and artist
    #[command(alias = "rm")]
    Delete {
        id: String,

        title: String,

        /// Year of the work (must be an integer)
        year: String,

        artist: String,

        style: String,
    },

    /// Remove every record, keeping the id counter
    Clear,

    /// Reset the catalog to a fresh empty state (destroys all records)
    Create,

    /// Open a catalog file and make it the active one
    Open {
        /// Catalog file to open
        path: PathBuf,
    },

    /// Write a copy of the catalog to another file
    Save {
        /// Destination file
        path: PathBuf,
    },

    /// Back up the catalog (same as save)
    Backup {
        /// Destination file
        path: PathBuf,
    },

    /// Restore the catalog from a backup (same as open)
    Restore {
        /// Backup file to restore from
        path: PathBuf,
    },

    /// Export all records to a CSV file
    Export {
        /// Destination CSV file
        path: PathBuf,
    },
}
