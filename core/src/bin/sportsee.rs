use anyhow::{Context, Result};
use clap::Parser;

use sportsee_core::adapters::resolve_user_id;
use sportsee_core::cli::print_dashboard_report;
use sportsee_core::{build_view, ClientConfig, Committed, DashboardSession, DataClient};

/// Henter dashborddata for en bruker og skriver rapport eller JSON.
#[derive(Debug, Parser)]
#[command(name = "sportsee", version, about = "SportSee dashboard data loader")]
struct Args {
    /// Bruker-id (default 12)
    #[arg(short, long)]
    user: Option<String>,

    /// Server fixtures uten å kontakte backend
    #[arg(long)]
    mock: bool,

    /// Overstyr backend-URL
    #[arg(long)]
    base_url: Option<String>,

    /// JSON-konfigfil; uten denne leses SPORTSEE_* fra miljøet
    #[arg(short, long)]
    config: Option<String>,

    /// Skriv DashboardView som JSON
    #[arg(long)]
    json: bool,

    /// Skriv prometheus-tellere etter kjøringen
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::from_env()?,
    };
    if args.mock {
        config.use_mock = true;
    }
    if let Some(url) = args.base_url {
        config.base_url = url;
    }

    let user_id = resolve_user_id(None, args.user.as_deref());
    let client = DataClient::new(config)?;
    let session = DashboardSession::new();

    if let Committed::Stale { cycle, current } = session.refresh(&client, user_id) {
        anyhow::bail!("fetch cycle {cycle} superseded by {current}");
    }

    let dashboard = session
        .snapshot()
        .context("no dashboard was committed")??;
    let view = build_view(&dashboard);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_dashboard_report(&view);
    }

    if args.metrics {
        print!("{}", client.metrics().gather_text());
    }
    Ok(())
}
