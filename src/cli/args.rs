//! CLI argument definitions using clap
//!
//! Commands:
//! - retail-sales serve [--config <path>] [--data <path>] [--port <n>]
//! - retail-sales query [--config <path>] [--data <path>] [query flags]
//! - retail-sales facets [--config <path>] [--data <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::RawSalesQuery;

/// Retail sales dashboard: query and serve an in-memory sales dataset
#[derive(Parser, Debug)]
#[command(name = "retail-sales")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where to find configuration and data
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the sales CSV, overriding config and CSV_FILE_PATH
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Query parameters, accepted in the same text form as the HTTP API
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Case-insensitive substring of customer name or phone number
    #[arg(long)]
    pub search: Option<String>,

    /// Comma-separated customer regions
    #[arg(long)]
    pub regions: Option<String>,

    #[arg(long)]
    pub genders: Option<String>,

    #[arg(long)]
    pub age_min: Option<String>,

    #[arg(long)]
    pub age_max: Option<String>,

    #[arg(long)]
    pub categories: Option<String>,

    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub payment_methods: Option<String>,

    /// YYYY-MM-DD, inclusive from midnight
    #[arg(long)]
    pub date_from: Option<String>,

    /// YYYY-MM-DD, inclusive through the end of the day
    #[arg(long)]
    pub date_to: Option<String>,

    /// date, quantity or customerName
    #[arg(long)]
    pub sort_by: Option<String>,

    #[arg(long)]
    pub page: Option<String>,

    #[arg(long)]
    pub page_size: Option<String>,
}

impl From<QueryArgs> for RawSalesQuery {
    fn from(args: QueryArgs) -> Self {
        RawSalesQuery {
            search: args.search,
            regions: args.regions,
            genders: args.genders,
            age_min: args.age_min,
            age_max: args.age_max,
            categories: args.categories,
            tags: args.tags,
            payment_methods: args.payment_methods,
            date_from: args.date_from,
            date_to: args.date_to,
            sort_by: args.sort_by,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the HTTP API
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port to bind, overriding config and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single query and print the page as JSON
    Query {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print filter options as JSON
    Facets {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
