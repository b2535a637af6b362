use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use tallyboard::app::{categories_report, dashboard_report, history_report, DashboardRequest};
use tallyboard::backend::RestBackend;
use tallyboard::clock::{Clock, SystemClock};
use tallyboard::config::Config;
use tallyboard::models::{Id, TransactionKind};
use tallyboard::period::{PeriodSelector, Timeframe};
use tallyboard::session::Session;

#[derive(Parser)]
#[command(name = "tallyboard")]
#[command(about = "Personal finance dashboard")]
struct Cli {
    /// Path to config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend user id of the signed-in session
    #[arg(long)]
    user: Option<String>,

    /// Access token; falls back to $TALLYBOARD_TOKEN
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full dashboard payload as JSON
    Dashboard {
        /// Overview scope start (YYYY-MM-DD); defaults to start of month
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Overview scope end (YYYY-MM-DD); defaults to a month from today
        #[arg(long)]
        to: Option<NaiveDate>,

        /// History chart year; defaults to the current year
        #[arg(long)]
        year: Option<i32>,

        /// History chart month (1-12); defaults to the current month
        #[arg(long)]
        month: Option<u32>,

        /// Chart grouping: month or year
        #[arg(long, default_value = "month")]
        timeframe: String,
    },
    /// Category breakdown for one transaction kind
    Categories {
        #[arg(long)]
        from: NaiveDate,

        #[arg(long)]
        to: NaiveDate,

        /// income or expense
        #[arg(long, default_value = "expense")]
        kind: String,
    },
    /// History chart rows for a period
    History {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,

        #[arg(long, default_value = "month")]
        timeframe: String,
    },
    /// Show current configuration
    Config,
}

fn parse_timeframe(raw: &str) -> Result<Timeframe> {
    match raw.trim().to_lowercase().as_str() {
        "month" => Ok(Timeframe::Month),
        "year" => Ok(Timeframe::Year),
        _ => bail!("Invalid timeframe: {raw}. Use: month, year"),
    }
}

fn parse_kind(raw: &str) -> Result<TransactionKind> {
    match raw.trim().to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        _ => bail!("Invalid kind: {raw}. Use: income, expense"),
    }
}

fn session_from(cli: &Cli) -> Result<Session> {
    let user = cli.user.clone().context("Missing --user")?;
    let token = cli
        .token
        .clone()
        .or_else(|| std::env::var("TALLYBOARD_TOKEN").ok())
        .context("Missing --token (or set TALLYBOARD_TOKEN)")?;
    Ok(Session::new(Id::from_string(user), token))
}

fn selector_for(
    clock: &dyn Clock,
    year: Option<i32>,
    month: Option<u32>,
    timeframe: &str,
) -> Result<PeriodSelector> {
    let mut selector = PeriodSelector::new(clock);
    selector.set_timeframe(parse_timeframe(timeframe)?);
    if let Some(year) = year {
        selector.select_year(year);
    }
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            bail!("Invalid month: {month}. Use 1-12");
        }
        selector.select_month(month - 1);
    }
    Ok(selector)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path)?;
    let clock = SystemClock;

    match &cli.command {
        Command::Config => {
            println!("Config file: {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Command::Dashboard {
            from,
            to,
            year,
            month,
            timeframe,
        } => {
            let session = session_from(&cli)?;
            let backend = RestBackend::new(
                config.backend.base_url.clone(),
                config.backend.api_key.clone(),
            );

            let mut request = DashboardRequest::current_month(&clock);
            if let Some(from) = from {
                request.from = *from;
            }
            if let Some(to) = to {
                request.to = *to;
            }
            request.selector = selector_for(&clock, *year, *month, timeframe)?;

            let output =
                dashboard_report(&backend, &session, &clock, &config.display, &request).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Categories { from, to, kind } => {
            let session = session_from(&cli)?;
            let backend = RestBackend::new(
                config.backend.base_url.clone(),
                config.backend.api_key.clone(),
            );

            let output = categories_report(
                &backend,
                &session,
                &config.display,
                *from,
                *to,
                parse_kind(kind)?,
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::History {
            year,
            month,
            timeframe,
        } => {
            let session = session_from(&cli)?;
            let backend = RestBackend::new(
                config.backend.base_url.clone(),
                config.backend.api_key.clone(),
            );

            let selector = selector_for(&clock, *year, *month, timeframe)?;
            let output =
                history_report(&backend, &session, &clock, &config.display, &selector).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
