use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Search the symbol index of generated API documentation", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Path to the serialized symbol index (overrides the config)
    #[arg(short, long, global = true)]
    pub index: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print ranked suggestions for one or more queries, as typed
    Search {
        #[arg(required = true)]
        queries: Vec<String>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Prefix for navigation targets
        #[arg(long)]
        base_href: Option<String>,
    },
    /// Resolve a query straight to the best match's target
    Navigate {
        query: String,
        #[arg(long)]
        base_href: Option<String>,
    },
}
