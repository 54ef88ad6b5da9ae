//! CLI command definitions and subcommands

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Interest;

/// tripcraft - trip planning client
#[derive(Parser)]
#[command(
    name = "tripcraft",
    about = "Plan a trip through a remote itinerary generation service",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Submit a trip request and render the itinerary
    Plan {
        /// Where the journey begins
        #[arg(long, value_name = "PLACE")]
        from: String,

        /// Where you want to go
        #[arg(long, value_name = "PLACE")]
        to: String,

        /// Trip start date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start_date: Option<NaiveDate>,

        /// Trip end date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        end_date: Option<NaiveDate>,

        /// Estimated total budget
        #[arg(long)]
        budget: Option<f64>,

        /// Number of travelers
        #[arg(long, default_value = "1")]
        travelers: u32,

        /// Interest tag (repeatable; see `tripcraft interests`)
        #[arg(long = "interest", value_name = "TAG")]
        interests: Vec<Interest>,

        /// Accessibility needs, dietary restrictions, etc.
        #[arg(long, default_value = "")]
        special_requirements: String,

        /// Leave historical forts out of the itinerary
        #[arg(long)]
        no_forts: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the interest tags the service understands
    Interests,
}

/// Output format for the rendered itinerary
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
