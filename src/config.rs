use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Track weekly turnip prices and forecast the likely peak window")]
pub struct Config {
    // Store file holding saved weeks
    #[arg(long, env = "TURNIP_DATA_PATH", default_value = "turnip-weeks.json", global = true)]
    pub data_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Forecast the peak window from slot prices or a saved week
    Predict {
        /// Comma-separated prices, Mon AM through Sat PM; leave a slot empty if not observed
        #[arg(long, conflicts_with = "id")]
        slots: Option<String>,

        /// Purchase price for the week
        #[arg(long)]
        buy: Option<String>,

        /// Predict from a saved week instead of --slots
        #[arg(long)]
        id: Option<String>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Save a week of prices as a record
    Save {
        /// Comma-separated prices, Mon AM through Sat PM
        #[arg(long)]
        slots: String,

        /// Purchase price for the week
        #[arg(long)]
        buy: Option<String>,

        /// Overwrite an existing record instead of creating a new one
        #[arg(long)]
        id: Option<String>,
    },

    /// List saved weeks with their classification
    List {
        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved week by id
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Write every saved week to a JSON file
    Export {
        /// Output path
        #[arg(long)]
        out: PathBuf,
    },

    /// Merge week records from exported JSON files into the store
    Import {
        /// Files previously produced by export
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
