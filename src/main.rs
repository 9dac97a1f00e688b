use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tr_mortgage_rs::render::{render_evaluation, render_rules, render_schedule};
use tr_mortgage_rs::{CalculatorConfig, Evaluation, HouseCategory, Language, MortgageCalculator};

#[derive(Parser, Debug)]
#[command(name = "tr-mortgage")]
#[command(about = "Mortgage calculator for Turkish residential property under BDDK loan-to-value rules.")]
struct CommandLine {
    /// House price in TRY
    price: Option<String>,

    /// House category: secondhand (ikinci-el) or new (yeni)
    #[arg(short, long, default_value = "secondhand")]
    category: HouseCategory,

    /// Label language: tr or en
    #[arg(short, long, default_value = "tr")]
    lang: Language,

    /// TOML or JSON file overriding the default schedules and terms
    #[arg(long, env = "TR_MORTGAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,

    /// Append the month-by-month repayment schedule
    #[arg(long)]
    schedule: bool,

    /// Print the category's loan rules only
    #[arg(long)]
    rules: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse();
    init_logging();

    let config = CalculatorConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("loading config from {}", path.display()),
        None => "loading config from environment".to_string(),
    })?;
    let calculator = MortgageCalculator::new(config)?;
    info!(category = %cli.category, lang = %cli.lang, "calculator ready");

    if cli.rules {
        print!("{}", render_rules(cli.category, cli.lang, calculator.config()));
        return Ok(());
    }

    let input = cli.price.as_deref().unwrap_or("");
    let evaluation = calculator.evaluate(input, cli.category);
    debug!(?evaluation, "evaluated input");

    if cli.json {
        println!("{}", evaluation.to_json_pretty());
        return Ok(());
    }

    print!(
        "{}",
        render_evaluation(&evaluation, cli.category, cli.lang, calculator.config())
    );

    if cli.schedule {
        if let Evaluation::Quote(quote) = &evaluation {
            if quote.mortgage.has_loan() {
                println!();
                print!("{}", render_schedule(&calculator.schedule(quote), cli.lang));
            }
        }
    }

    Ok(())
}
