use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use client::net::transport::{HttpTransport, Transport, TransportError};
use client::view::{render_card, render_status};
use client::{Dashboard, Field};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("{0}")]
    Dashboard(String),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Mini local business dashboard client")]
struct Cli {
    #[arg(long, env = "DASHBOARD_API_URL", default_value = client::config::BUILD_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Fetch simulated metrics for a business.
    Fetch(FetchArgs),
}

#[derive(Args, Debug)]
struct FetchArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    location: String,

    #[arg(long, default_value_t = 0, help = "Regenerate the headline this many times")]
    regenerate: usize,

    #[arg(long, default_value_t = false, help = "Print the final result as JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let transport = Arc::new(HttpTransport::new(&cli.api_url)?);

    match cli.command {
        Command::Ping => run_ping(&transport).await,
        Command::Fetch(args) => run_fetch(transport, args).await,
    }
}

async fn run_ping(transport: &HttpTransport) -> Result<(), CliError> {
    let response = transport.get("/healthz", &[]).await?;
    if !response.ok() {
        return Err(CliError::Unhealthy(response.status));
    }
    println!("ok");
    Ok(())
}

async fn run_fetch(transport: Arc<HttpTransport>, args: FetchArgs) -> Result<(), CliError> {
    let dashboard = Dashboard::new(transport);
    dashboard.edit_field(Field::Name, args.name);
    dashboard.edit_field(Field::Location, args.location);

    dashboard.submit().await;
    let state = dashboard.snapshot();
    if let Some(error) = state.error {
        return Err(CliError::Dashboard(error));
    }
    let Some(card) = render_card(&state) else {
        return Err(CliError::Dashboard(render_status(&state)));
    };
    if !args.json {
        println!("{card}");
    }

    for _ in 0..args.regenerate {
        dashboard.regenerate().await;
        if !args.json {
            if let Some(result) = dashboard.snapshot().result {
                println!("  \"{}\"", result.headline);
            }
        }
    }

    if args.json {
        if let Some(result) = dashboard.snapshot().result {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
