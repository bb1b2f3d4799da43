use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hashdex", version, about = "Contact book on a chained hash table")]
pub struct Cli {
    /// Number of buckets in the table (fixed for the whole run)
    #[arg(long, env = "HASHDEX_CAPACITY", default_value_t = 10)]
    pub capacity: usize,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scripted walkthrough: inserts, a collision, an update
    /// and a miss, printing the table between steps
    Demo,

    /// Insert contacts, then print the resulting table.
    /// Repeat --name/--number pairs to insert several at once
    Add {
        /// Contact name
        #[arg(long, required = true)]
        name: Vec<String>,

        /// Contact phone number
        #[arg(long, required = true)]
        number: Vec<String>,
    },

    /// Show which bucket a key hashes to
    Bucket {
        /// Key to hash
        #[arg(long)]
        key: String,
    },
}
