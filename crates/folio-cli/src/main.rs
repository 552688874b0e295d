//! # Folio CLI
//!
//! Command-line interface for browsing the portfolio catalog.
//!
//! ## Commands
//!
//! - `folio projects` - List and filter projects
//! - `folio blogs` - List and filter blog posts
//! - `folio show <slug>` - Print a single blog post
//! - `folio search <query>` - Global search across projects, blogs, pages
//! - `folio work` - Print the engineering expertise areas
//! - `folio resume` - Print the resume
//! - `folio overview` - Show catalog statistics
//! - `folio interactive` - Start interactive search mode
//!
//! ## Example Usage
//!
//! ```bash
//! # Projects still under construction
//! folio projects --status building
//!
//! # Posts tagged Backend that mention caching
//! folio blogs caching --tag Backend
//!
//! # Interactive search
//! folio interactive
//! ```

mod app;
mod commands;
mod tui;

use clap::{Parser, Subcommand};
use folio_core::{ItemKind, ProjectStatus};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Folio - Browse a developer portfolio from the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and search projects
    Projects {
        /// Free-text query over name, description, and tech stack
        query: Option<String>,

        /// Only show projects with this status (building, working)
        #[arg(short, long)]
        status: Option<ProjectStatus>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List and search blog posts
    Blogs {
        /// Free-text query over title, description, and tags
        query: Option<String>,

        /// Only show posts carrying this tag (exact match)
        #[arg(short, long)]
        tag: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print a single blog post
    Show {
        /// The post's slug (see `folio blogs`)
        slug: String,
    },

    /// Search across projects, blogs, and pages
    Search {
        /// Free-text query over titles and descriptions
        query: Option<String>,

        /// Restrict results to one kind (project, blog, page)
        #[arg(short, long)]
        kind: Option<ItemKind>,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the engineering expertise areas
    Work {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the resume
    Resume {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show catalog statistics
    Overview,

    /// Start interactive search mode
    #[command(alias = "i")]
    Interactive,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => folio_core::Config::load_from(path)?,
        None => folio_core::Config::load()?,
    };

    // Execute command
    match cli.command {
        Commands::Projects {
            query,
            status,
            output,
        } => commands::projects::run(config, query.as_deref(), status, output),
        Commands::Blogs { query, tag, output } => {
            commands::blogs::run(config, query.as_deref(), tag.as_deref(), output)
        }
        Commands::Show { slug } => commands::show::run(config, &slug),
        Commands::Search {
            query,
            kind,
            limit,
            output,
        } => commands::search::run(config, query.as_deref(), kind, limit, output),
        Commands::Work { output } => commands::work::run(config, output),
        Commands::Resume { output } => commands::resume::run(config, output),
        Commands::Overview => commands::overview::run(config),
        Commands::Interactive => tui::run(config),
    }
}
