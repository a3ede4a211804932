//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the cornerstone CLI.
#[derive(Debug, Parser)]
#[command(name = "cornerstone", version, about = "SEO content-analysis toolkit")]
pub struct Cli {
    /// Config file path; defaults to `~/.cornerstone/config.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The analysis to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available analyses.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a content file against a target cluster
    Score {
        /// Path to the content text file
        #[arg(long)]
        content: PathBuf,
        /// Path to the cluster JSON file
        #[arg(long)]
        cluster: PathBuf,
    },

    /// Classify search intent for a keyword from its SERP
    Intent {
        /// The keyword to classify
        keyword: String,
    },

    /// Expand clusters with semantically related keywords
    Expand {
        /// Path to a JSON object mapping cluster ids to keyword lists
        clusters: PathBuf,
    },

    /// Extract entities from keywords
    Entities {
        /// Keywords to analyze
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Report topical coverage across clusters
    Coverage {
        /// Path to a JSON array of clusters
        clusters: PathBuf,
    },

    /// Generate content briefs from clusters
    Briefs {
        /// Path to a JSON array of clusters
        clusters: PathBuf,
    },

    /// Enrich clusters with search-console performance data
    Console {
        /// Path to a JSON array of clusters
        clusters: PathBuf,
        /// Site URL to report on
        #[arg(long)]
        site: String,
        /// Trailing window in days
        #[arg(long, default_value_t = 90)]
        days: i64,
        /// Path to the service credentials file
        #[arg(long, default_value = "credentials.json")]
        credentials: PathBuf,
    },
}
