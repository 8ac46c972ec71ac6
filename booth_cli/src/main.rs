//! # Boothcost CLI
//!
//! Terminal front end for the exhibit cost engine.
//!
//! ```text
//! boothcost estimate booth.json          # price a full CalculationInput document
//! boothcost quick --area 18 --team 4 --nights 3
//! boothcost rates > india.json           # dump the default rate card
//! ```
//!
//! Set `RUST_LOG=booth_core=debug` to trace each calculation step.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use booth_core::calculations::{CalculationInput, MarketingItems};
use booth_core::rates::{EstimateRequest, RateCard};
use booth_core::units::{Area, AreaUnit};
use booth_core::{ContingencyBase, EstimateError, Quote};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boothcost", version, about = "Trade-show exhibit cost estimator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a CalculationInput JSON document
    Estimate {
        /// Path to the input document
        input: PathBuf,

        /// Currency code shown in the summary
        #[arg(long, default_value = "INR")]
        currency: String,

        /// Exhibitor name shown on the quote
        #[arg(long, default_value = "Exhibitor")]
        exhibitor: String,

        /// Print the full quote as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Price a booth from a few quantities and a rate card
    Quick(QuickArgs),

    /// Print the built-in rate card as JSON
    Rates,
}

#[derive(clap::Args)]
struct QuickArgs {
    /// Booth floor area
    #[arg(long)]
    area: Decimal,

    /// Area unit: sqm or sqft
    #[arg(long, default_value = "sqm")]
    unit: String,

    /// Travelling team size
    #[arg(long, default_value_t = 0)]
    team: u32,

    /// Hotel nights per person
    #[arg(long, default_value_t = 0)]
    nights: u32,

    #[arg(long, default_value_t = 0)]
    promoters: u32,

    #[arg(long, default_value_t = 0)]
    promoter_days: u32,

    /// Connected power load in kW
    #[arg(long)]
    power_kw: Option<Decimal>,

    /// Freight weight in kg
    #[arg(long)]
    weight_kg: Option<Decimal>,

    /// Flat marketing budget
    #[arg(long)]
    marketing: Option<Decimal>,

    /// Contingency base: pre_tax or post_tax (default from the rate card)
    #[arg(long)]
    contingency_base: Option<String>,

    /// Rate card JSON (default: built-in Indian market)
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Event name shown on the quote
    #[arg(long, default_value = "Trade Show")]
    event: String,

    /// Exhibitor name shown on the quote
    #[arg(long, default_value = "Exhibitor")]
    exhibitor: String,

    /// Print the full quote as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(estimate_err) = err.downcast_ref::<EstimateError>() {
                if let Ok(json) = serde_json::to_string_pretty(estimate_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Estimate {
            input,
            currency,
            exhibitor,
            json,
        } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let calc_input = CalculationInput::from_json(&text)?;
            let event = if calc_input.label.is_empty() {
                input.display().to_string()
            } else {
                calc_input.label.clone()
            };
            let quote = Quote::prepare(event, exhibitor, currency, calc_input)?;
            print_quote(&quote, json)
        }
        Command::Quick(args) => {
            let card = match &args.rates {
                Some(path) => RateCard::load(path)?,
                None => RateCard::indian_market(),
            };
            debug!(market = %card.market, currency = %card.currency, "using rate card");
            let input = card.build_input(&quick_request(&args)?)?;
            let quote = Quote::prepare(&args.event, &args.exhibitor, &card.currency, input)?;
            print_quote(&quote, args.json)
        }
        Command::Rates => {
            println!("{}", RateCard::indian_market().to_json_pretty()?);
            Ok(())
        }
    }
}

fn quick_request(args: &QuickArgs) -> Result<EstimateRequest> {
    let unit: AreaUnit = args.unit.parse()?;
    let mut request = EstimateRequest::new(Area::new(args.area, unit))
        .with_label(args.event.clone())
        .with_team(args.team, args.nights)
        .with_promoters(args.promoters, args.promoter_days);

    request.power_kw = args.power_kw;
    request.weight_kg = args.weight_kg;
    if let Some(budget) = args.marketing {
        request.marketing = MarketingItems {
            other: Some(budget),
            ..Default::default()
        };
    }
    if let Some(base) = &args.contingency_base {
        request.contingency_base = Some(base.parse::<ContingencyBase>()?);
    }
    Ok(request)
}

fn print_quote(quote: &Quote, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }

    println!("═══════════════════════════════════════════════════");
    println!("  EXHIBIT COST ESTIMATE");
    println!("═══════════════════════════════════════════════════");
    for line in quote.summary_lines() {
        println!("  {}", line);
    }
    println!("═══════════════════════════════════════════════════");
    Ok(())
}
