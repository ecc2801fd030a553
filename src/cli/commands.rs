//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stuff Manager CLI
#[derive(Parser, Debug)]
#[command(name = "stuff-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// DuckDB file (in-memory when omitted)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Demo records to insert when the table is empty
        #[arg(long)]
        seed: Option<usize>,
    },

    /// Insert demo records into a database file
    Seed {
        /// DuckDB file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Number of records to insert
        #[arg(short = 'n', long, default_value = "12")]
        count: usize,
    },

    /// Fetch one page from a running server
    Fetch {
        /// Server base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: i64,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Browse the list interactively
    Browse {
        /// Server base URL
        #[arg(short, long)]
        url: Option<String>,

        /// Page to open first
        #[arg(short, long, default_value = "1")]
        page: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
