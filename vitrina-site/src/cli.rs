//! Command line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::sections::Section;

#[derive(Debug, Parser)]
#[command(name = "vitrina", version, about = "Preview the vitrina site carousels")]
pub struct Cli {
    /// Site configuration (TOML). Missing default file means built-in defaults.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Environment file loaded before anything else.
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Serve content documents from this directory.
    #[arg(long, conflicts_with = "data_url")]
    pub data_dir: Option<PathBuf>,

    /// Fetch content documents relative to this URL.
    #[arg(long)]
    pub data_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load content and print each section once it settles.
    Preview {
        #[arg(long, value_enum)]
        section: Option<Section>,
    },
    /// Run one section's autoplay and print every change.
    Play {
        #[arg(long, value_enum, default_value = "hero")]
        section: Section,
        #[arg(long, default_value = "20s", value_parser = humantime::parse_duration)]
        duration: Duration,
    },
    /// Print the lead channel URLs for the configured showroom.
    Contact,
}
