mod clock;
mod config;
mod email;
mod error;
mod model;
mod notifier;

use std::path::Path;

use clap::Parser;
use derive_more::{Display, Error};
use error_stack::{Report, ResultExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clock::SystemClock;
use config::AppConfig;
use email::EmailRenderer;
use error::InputError;
use model::SignalAlert;
use notifier::Notifier;
use notifier::terminal::TerminalNotifier;

#[derive(Debug, Display, Error)]
pub enum AppError {
    #[display("configuration error")]
    Config,
    #[display("signal input error")]
    Input,
    #[display("output error")]
    Output,
}

#[derive(Parser)]
#[command(name = "signal-notifier", about = "Market signal alert email renderer")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Read the signal from a JSON payload file instead of field flags
    #[arg(
        long,
        conflicts_with_all = ["symbol", "signal", "direction", "timeframe", "last_close", "timestamp"]
    )]
    input: Option<String>,

    /// Instrument symbol (e.g. BTCUSDT)
    #[arg(long)]
    symbol: Option<String>,

    /// Signal value; BUY and SELL get dedicated styling
    #[arg(long)]
    signal: Option<String>,

    /// Trend direction; UP and DOWN get dedicated styling
    #[arg(long)]
    direction: Option<String>,

    /// Timeframe the signal was computed on (e.g. 1h)
    #[arg(long)]
    timeframe: Option<String>,

    /// Closing price at signal time
    #[arg(long)]
    last_close: Option<f64>,

    /// Signal timestamp, inserted verbatim; defaults to now in ISO-8601
    #[arg(long)]
    timestamp: Option<String>,

    /// Write the rendered document to this file instead of stdout
    #[arg(short, long)]
    out: Option<String>,
}

fn main() {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Report<AppError>> {
    let cli = Cli::parse();
    let config = config::load(Path::new(&cli.config)).change_context(AppError::Config)?;

    init_tracing(&config);

    let alert = build_alert(&cli).change_context(AppError::Input)?;

    let renderer = EmailRenderer::new(config.email, Box::new(SystemClock));
    let html = renderer.render(&alert);

    let notifier: Box<dyn Notifier> = Box::new(TerminalNotifier);
    notifier.notify(&alert, &html);

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &html)
                .change_context(AppError::Output)
                .attach_with(|| format!("path: {path}"))?;
            info!(path = %path, bytes = html.len(), "alert email written");
        }
        None => println!("{html}"),
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::new(&config.general.log_level);
    // Logs go to stderr so stdout carries only the rendered document.
    match config.general.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn build_alert(cli: &Cli) -> Result<SignalAlert, Report<InputError>> {
    if let Some(path) = &cli.input {
        let content = std::fs::read_to_string(path)
            .change_context(InputError::ReadFile)
            .attach_with(|| format!("path: {path}"))?;
        let alert: SignalAlert =
            serde_json::from_str(&content).change_context(InputError::Parse {
                reason: "invalid JSON or schema mismatch".into(),
            })?;
        return Ok(alert);
    }

    Ok(SignalAlert {
        symbol: required(&cli.symbol, "symbol")?,
        signal: required(&cli.signal, "signal")?,
        direction: required(&cli.direction, "direction")?,
        timeframe: required(&cli.timeframe, "timeframe")?,
        last_close: cli.last_close,
        timestamp: cli.timestamp.clone(),
    })
}

fn required(value: &Option<String>, field: &str) -> Result<String, Report<InputError>> {
    value
        .clone()
        .ok_or_else(|| Report::new(InputError::MissingField { field: field.into() }))
}
