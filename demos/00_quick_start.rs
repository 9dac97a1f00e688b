/// quick start - minimal example to get started
use tr_mortgage_rs::{HouseCategory, MortgageCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // published BDDK rules, 10 years at 2.65% monthly
    let calculator = MortgageCalculator::bddk();

    // a 1.5M TRY secondhand flat
    let evaluation = calculator.evaluate("1500000", HouseCategory::Secondhand);

    println!("{}", evaluation.to_json_pretty());

    Ok(())
}
