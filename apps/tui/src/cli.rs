use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pasture", version, about = "Pasture to Plate insights dashboard")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON (implies --headless)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory holding labeled.json and country_analysis.json
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// JSON file overriding the hidden label taxonomy
    #[arg(long, value_name = "PATH")]
    pub taxonomy: Option<PathBuf>,

    /// Replace the journey map with its placeholder
    #[arg(long = "no-map")]
    pub no_map: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build country_analysis.json from labeled.json
    BuildOrigins {
        /// Labeled word list (defaults to <data-dir>/labeled.json)
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Output summary (defaults to <data-dir>/country_analysis.json)
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// JSON file overriding the country alias table
        #[arg(long, value_name = "PATH")]
        aliases: Option<PathBuf>,
    },
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.data_dir {
            std::env::set_var("PASTURE_DATA_DIR", dir);
        }
        if let Some(path) = &self.taxonomy {
            std::env::set_var("PASTURE_TAXONOMY", path);
        }
        if self.no_map {
            std::env::set_var("PASTURE_MAP", "off");
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
