use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::ResearchMode;

#[derive(Parser, Debug)]
#[command(name = "rimworld-mod-gen")]
#[command(version, about = "Generate RimWorld mod folders from a project file")]
pub struct Cli {
    /// Settings file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the mod folder for a project
    Generate {
        /// Project file (JSON)
        project: PathBuf,

        /// Directory the mod folder is created in
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only write these categories (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,

        /// Skip these categories (comma-separated)
        #[arg(long, value_delimiter = ',')]
        skip: Option<Vec<String>>,

        /// Where research unlocks are written
        #[arg(long, value_enum)]
        research_mode: Option<ResearchMode>,

        /// Replace the mod folder if it already exists
        #[arg(short, long)]
        force: bool,

        /// Show the full-screen dashboard
        #[arg(long)]
        tui: bool,
    },

    /// Load a project and build every def without writing anything
    Validate {
        /// Project file (JSON)
        project: PathBuf,
    },

    /// Print the generated XML of one category
    Show {
        /// Project file (JSON)
        project: PathBuf,

        /// Category key (see list-categories)
        category: String,

        /// Where research unlocks are written
        #[arg(long, value_enum)]
        research_mode: Option<ResearchMode>,
    },

    /// Write an empty project file
    Init {
        /// Project file to create
        project: PathBuf,

        /// Mod name
        #[arg(long)]
        name: Option<String>,

        /// Mod author
        #[arg(long)]
        author: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List all category keys
    ListCategories,

    /// Print the effective settings and where they are stored
    Config,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
