/// categories - the same prices under the secondhand and new-house schedules
use tr_mortgage_rs::format::{format_currency, format_percent};
use tr_mortgage_rs::{HouseCategory, Money, MortgageCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== secondhand vs new ===\n");

    let calculator = MortgageCalculator::bddk();
    let prices = [800_000, 1_500_000, 4_000_000, 9_999_999, 10_000_000, 25_000_000];

    for price in prices {
        for category in HouseCategory::ALL {
            let quote = calculator.quote(Money::from_major(price), category)?;
            println!(
                "{:>12} {:<10} loan {:>14} ({:>2}%)  down {:>14}  monthly {:>12}",
                format_currency(quote.house_price),
                category.to_string(),
                format_currency(quote.mortgage.loan_amount),
                format_percent(quote.mortgage.loan_percentage),
                format_currency(quote.mortgage.down_payment),
                format_currency(quote.monthly_payment),
            );
        }
    }

    println!("\n=== capped secondhand quote as json ===\n");
    let capped = calculator.quote(Money::from_major(6_000_000), HouseCategory::Secondhand)?;
    println!("{}", capped.to_json_pretty());

    Ok(())
}
