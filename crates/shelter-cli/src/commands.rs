//! Subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (defaults to SHELTER_PORT or 5100)
        #[arg(short, long)]
        port: Option<u16>,
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,
        /// Allowed CORS origin; repeat for several. Allows all when omitted.
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },
    /// Print all dogs as a JSON array
    List,
    /// Add a dog
    Add {
        /// Name of the dog (at least 2 characters)
        #[arg(long)]
        name: String,
        /// Age in whole years, 0 to 20
        #[arg(long)]
        age: i64,
        /// Male, Female or Unknown
        #[arg(long)]
        gender: String,
        /// Breed name; created when it doesn't exist yet
        #[arg(long)]
        breed: Option<String>,
        /// Free-text description (at least 10 characters)
        #[arg(long)]
        description: Option<String>,
    },
    /// Import dogs from a JSON file holding an array of dog objects
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Show resolved data paths
    Paths,
}
