/// custom config - alternate schedules and terms without code changes
use tr_mortgage_rs::render::{render_evaluation, render_schedule};
use tr_mortgage_rs::{CalculatorConfig, HouseCategory, Language, MortgageCalculator};

const OVERRIDES: &str = r#"
[amortization]
term_years = 5
monthly_rate = "0.0199"

[new]
loan_cap = "6000000"

[[new.tiers]]
from = "0"
ratio = "0.75"

[[new.tiers]]
from = "7500000"
ratio = "0.55"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_toml_str(OVERRIDES)?;
    let calculator = MortgageCalculator::new(config)?;

    let evaluation = calculator.evaluate("12000000", HouseCategory::New);
    print!(
        "{}",
        render_evaluation(&evaluation, HouseCategory::New, Language::En, calculator.config())
    );

    if let Some(quote) = evaluation.quote() {
        println!();
        let schedule = calculator.schedule(quote);
        let first_year = tr_mortgage_rs::AmortizationSchedule {
            payments: schedule.payments.iter().take(12).cloned().collect(),
            ..schedule
        };
        print!("{}", render_schedule(&first_year, Language::En));
    }

    Ok(())
}
