//! `fxoption`: command-line front end to the FX option pricer.
//!
//! # Commands
//!
//! - `fxoption price ...` - net present value in domestic currency
//! - `fxoption greeks ...` - delta, gamma, vega, theta and rho
//!
//! Both take the seven option inputs as flags.  Errors are reported on
//! stderr with a non-zero exit status; logs go to stderr as well, so the
//! JSON written to stdout with `--json` stays machine-readable.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fxoption::instruments::OptionType;
use fxoption::time::EvaluationContext;
use fxoption::{FxOptionRequest, PricerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Garman-Kohlhagen pricer for European FX vanilla options
#[derive(Debug, Parser)]
#[command(name = "fxoption")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Evaluation date (YYYY-MM-DD); overrides the configuration
    #[arg(short = 'd', long, global = true)]
    evaluation_date: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Net present value of the option
    Price(OptionArgs),

    /// Delta, gamma, vega, theta and rho of the option
    Greeks(OptionArgs),
}

/// The seven inputs of a pricing request.
#[derive(Debug, Args)]
struct OptionArgs {
    /// Option type: call, put, or the codes 1 (call) / 2 (put)
    #[arg(short = 't', long = "type")]
    option_type: OptionType,

    /// Spot FX rate (domestic per unit of foreign)
    #[arg(long)]
    spot: f64,

    /// Strike FX rate
    #[arg(long)]
    strike: f64,

    /// Domestic continuously-compounded rate
    #[arg(long, allow_hyphen_values = true)]
    domestic_rate: f64,

    /// Foreign continuously-compounded rate
    #[arg(long, allow_hyphen_values = true)]
    foreign_rate: f64,

    /// Annualized volatility
    #[arg(long, allow_hyphen_values = true)]
    volatility: f64,

    /// Calendar days to maturity
    #[arg(long, allow_hyphen_values = true)]
    days: i32,
}

impl From<&OptionArgs> for FxOptionRequest {
    fn from(a: &OptionArgs) -> Self {
        FxOptionRequest {
            option_type: a.option_type,
            spot: a.spot,
            strike: a.strike,
            domestic_rate: a.domestic_rate,
            foreign_rate: a.foreign_rate,
            volatility: a.volatility,
            days_to_maturity: a.days,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn evaluation_context(cli: &Cli) -> Result<EvaluationContext> {
    let mut config = match &cli.config {
        Some(path) => PricerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PricerConfig::default(),
    };
    if let Some(date) = &cli.evaluation_date {
        config.evaluation_date = Some(date.clone());
    }
    let ctx = config
        .evaluation_context()
        .context("building the evaluation context")?;
    info!(evaluation_date = %ctx.evaluation_date(), "evaluation context ready");
    Ok(ctx)
}

fn run(cli: &Cli) -> Result<String> {
    let ctx = evaluation_context(cli)?;
    match &cli.command {
        Commands::Price(args) => {
            let request = FxOptionRequest::from(args);
            let npv = fxoption::price(&ctx, &request).context("pricing failed")?;
            if cli.json {
                Ok(serde_json::json!({ "npv": npv }).to_string())
            } else {
                Ok(format!("{npv:.10}"))
            }
        }
        Commands::Greeks(args) => {
            let request = FxOptionRequest::from(args);
            let g = fxoption::greeks(&ctx, &request).context("computing greeks failed")?;
            if cli.json {
                Ok(serde_json::to_string(&g)?)
            } else {
                Ok(format!(
                    "delta {:.10}\ngamma {:.10}\nvega  {:.10}\ntheta {:.10}\nrho   {:.10}",
                    g.delta, g.gamma, g.vega, g.theta, g.rho
                ))
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    println!("{}", run(&cli)?);
    Ok(())
}
