use clap::{Parser, Subcommand};

use crate::config::STORAGE_PATH_ENV;

#[derive(Parser, Debug)]
#[command(name = "addressbook", version, about = "Address book kept in a single .txt file")]
pub struct Cli {
    /// Storage file, must end with .txt (default: addressbook.txt)
    #[arg(short, long, env = STORAGE_PATH_ENV, global = true)]
    pub file: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the storage file path
    Path,

    /// List persons
    List {
        /// List only persons with this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Add a new person
    Add {
        /// Person name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Postal address
        #[arg(long)]
        address: String,

        /// Tag (repeat for several)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Hide the phone number from listings
        #[arg(long)]
        private_phone: bool,

        /// Hide the email from listings
        #[arg(long)]
        private_email: bool,

        /// Hide the address from listings
        #[arg(long)]
        private_address: bool,
    },

    /// Delete a person by name and phone number
    Delete {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,
    },

    /// Remove every person and tag
    Clear,
}
