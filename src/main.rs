//! tripcraft - trip planning client
//!
//! CLI entry point: builds the trip request from flags, runs one submission,
//! and renders the resulting state.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use tripcraft::cli::{Cli, Command, OutputFormat};
use tripcraft::config::Config;
use tripcraft::domain::{Interest, TripEdit, TripRequest};
use tripcraft::planner::HttpPlannerClient;
use tripcraft::session::{PlannerSession, SubmissionState};
use tripcraft::{render, SubmitRejected};

fn setup_logging(verbose: bool) -> Result<()> {
    // Logs go to a file so stdout stays clean for the rendered itinerary.
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripcraft")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("tripcraft.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("tripcraft loaded config: planner={}", config.planner.base_url);

    match cli.command {
        Command::Plan {
            from,
            to,
            start_date,
            end_date,
            budget,
            travelers,
            interests,
            special_requirements,
            no_forts,
            format,
        } => {
            let request = build_request(
                from,
                to,
                start_date,
                end_date,
                budget,
                travelers,
                interests,
                special_requirements,
                no_forts,
            )?;
            cmd_plan(&config, request, format).await
        }
        Command::Interests => cmd_interests(),
    }
}

/// Assemble the trip request through the same edit events a form would emit
#[allow(clippy::too_many_arguments)]
fn build_request(
    from: String,
    to: String,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    budget: Option<f64>,
    travelers: u32,
    interests: Vec<Interest>,
    special_requirements: String,
    no_forts: bool,
) -> Result<TripRequest> {
    let mut request = TripRequest::default();
    let edits = [
        TripEdit::StartingPoint(from),
        TripEdit::Destination(to),
        TripEdit::StartDate(start_date),
        TripEdit::EndDate(end_date),
        TripEdit::Budget(budget),
        TripEdit::Travelers(travelers),
        TripEdit::SpecialRequirements(special_requirements),
        TripEdit::IncludeForts(!no_forts),
    ];
    for edit in edits {
        request.apply(edit).map_err(|e| eyre::eyre!(e.to_string()))?;
    }
    for interest in interests {
        // Repeated flags toggle like repeated clicks: the set never duplicates.
        request.toggle_interest(interest);
    }
    Ok(request)
}

async fn cmd_plan(config: &Config, request: TripRequest, format: OutputFormat) -> Result<()> {
    let client = Arc::new(HttpPlannerClient::from_config(&config.planner)?);
    let mut session = PlannerSession::new(client);

    println!("{}", "Planning your adventure...".dimmed());

    match session.submit(&request).await {
        Ok(SubmissionState::Succeeded(itinerary)) => match format {
            OutputFormat::Text => print!("{}", render::render_text(&request, itinerary)),
            OutputFormat::Json => println!("{}", render::render_json(itinerary)?),
        },
        Ok(SubmissionState::Failed { message }) => {
            eprintln!("{}", message.red());
            eprintln!("Please check your inputs and try again.");
        }
        Ok(state) => {
            // submit() always settles into Succeeded or Failed.
            eprintln!("Unexpected submission state: {state:?}");
        }
        Err(rejected @ SubmitRejected::Invalid(_)) => {
            eprintln!("{}", rejected.to_string().red());
            eprintln!("Please check your inputs and try again.");
        }
        Err(rejected) => eprintln!("{}", rejected.to_string().red()),
    }

    Ok(())
}

fn cmd_interests() -> Result<()> {
    println!("{}", "Interest tags:".bold());
    for interest in Interest::ALL {
        println!("  {}", interest);
    }
    Ok(())
}
