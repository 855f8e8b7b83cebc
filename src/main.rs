use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use driver_earnings::api::{AppState, EstimateRequest, create_router, perform_estimate};
use driver_earnings::config::ConfigLoader;
use driver_earnings::models::{FormSubmission, HoursField, WeekendChoice, WorkTimeSelection};
use tracing_subscriber::EnvFilter;

/// Estimate weekly earnings for a London ride-hailing driver.
#[derive(Parser, Debug)]
#[command(name = "driver-earnings")]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML configuration file (defaults to the built-in London rates)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Print an estimate for the given inputs
    Estimate {
        /// Hours driven per week (20-90)
        #[arg(long)]
        hours: String,

        /// Ticked time slot with its multiplier, e.g. late-night=1.5 (repeatable)
        #[arg(long = "time", value_name = "SLOT=MULTIPLIER")]
        times: Vec<WorkTimeSelection>,

        /// Whether weekends are worked (yes/no)
        #[arg(long)]
        weekend: Option<WeekendChoice>,

        /// Car category (normal, executive, seater)
        #[arg(long)]
        car: Option<String>,

        /// Page URL to put in the share links
        #[arg(long)]
        page_url: Option<String>,

        /// Print the full estimate as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Serve { bind } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;

            tracing::info!(address = %bind, "Earnings estimator listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    tokio::signal::ctrl_c().await.ok();
                    tracing::info!("shutting down");
                })
                .await
                .context("Server error")?;
        }
        Command::Estimate {
            hours,
            times,
            weekend,
            car,
            page_url,
            json,
        } => {
            let request = EstimateRequest {
                form: FormSubmission {
                    hours: Some(HoursField::Text(hours)),
                    work_times: times,
                    weekend,
                    car_category: car,
                },
                page_url,
            };

            let estimate = match perform_estimate(&request, &config) {
                Ok(estimate) => estimate,
                Err(err) if err.is_advisory() => {
                    eprintln!("{}", err);
                    std::process::exit(2);
                }
                Err(err) => return Err(err.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("{}", estimate.breakdown);
                println!();
                println!("Share: {}", estimate.share.message);
                println!("WhatsApp: {}", estimate.share.whatsapp_url);
                println!("Email: {}", estimate.share.email_url);
                println!("Link: {}", estimate.share.copy_link);
            }
        }
    }

    Ok(())
}
