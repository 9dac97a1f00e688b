//! Plain-text rendering of an evaluation: header, then nothing, an invalid
//! price notice, or the result panel.

use std::fmt::Write;

use crate::calculator::{Evaluation, MortgageQuote};
use crate::config::{CalculatorConfig, BDDK_SOURCE_URL};
use crate::format::{format_currency, format_grouped};
use crate::i18n::{self, labels};
use crate::payments::AmortizationSchedule;
use crate::types::{HouseCategory, Language};

/// title, regulation link and selected category
pub fn render_header(language: Language, category: HouseCategory) -> String {
    let t = labels(language);
    let mut out = String::new();
    let _ = writeln!(out, "{} · {}  [{}]", t.title, t.subtitle, language);
    let _ = writeln!(out, "{}: {}", t.bddk, BDDK_SOURCE_URL);
    let _ = writeln!(out, "{}: {}", t.house_type, t.category(category));
    out
}

/// the full screen for one evaluation
pub fn render_evaluation(
    evaluation: &Evaluation,
    category: HouseCategory,
    language: Language,
    config: &CalculatorConfig,
) -> String {
    let mut out = render_header(language, category);
    match evaluation {
        Evaluation::NoInput => {}
        Evaluation::InvalidPrice { .. } => {
            out.push('\n');
            out.push_str(labels(language).invalid_price);
            out.push('\n');
        }
        Evaluation::Quote(quote) => {
            out.push('\n');
            out.push_str(&render_quote(quote, language, config));
            out.push('\n');
            out.push_str(&render_rules(quote.category, language, config));
        }
    }
    out
}

/// price, loan, payments and down payment
pub fn render_quote(quote: &MortgageQuote, language: Language, config: &CalculatorConfig) -> String {
    let t = labels(language);
    let mortgage = &quote.mortgage;
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", t.house_price, format_currency(mortgage.house_price()));
    let _ = writeln!(
        out,
        "{}: {} ({})",
        t.loan_amount,
        format_currency(mortgage.loan_amount),
        i18n::share_of_price(language, mortgage.loan_percentage)
    );

    if mortgage.has_loan() {
        let _ = writeln!(out, "  {}: {}", t.monthly_payment, format_currency(quote.monthly_payment));
        let _ = writeln!(out, "  {}: {}", t.total_payment, format_currency(quote.total_payment));
        let _ = writeln!(
            out,
            "  {}",
            i18n::terms_line(language, quote.terms.term_years, quote.terms.monthly_rate)
        );
    } else {
        let threshold = config.policy(quote.category).no_loan_from;
        let _ = writeln!(out, "  {}", i18n::no_loan_notice(language, threshold));
    }

    let _ = writeln!(out, "{}: {}", t.down_payment, format_currency(mortgage.down_payment));
    out
}

/// the category's tier rules, one bullet per tier
pub fn render_rules(category: HouseCategory, language: Language, config: &CalculatorConfig) -> String {
    let policy = config.policy(category);
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels(language).rules_heading(category));

    let mut brackets = policy.tiers.brackets().peekable();
    while let Some(bracket) = brackets.next() {
        // the cap is quoted on the open-ended tier
        let cap = if brackets.peek().is_none() { policy.loan_cap } else { None };
        let _ = writeln!(
            out,
            "• {}",
            i18n::tier_rule(language, bracket.from, bracket.until, bracket.ratio, cap)
        );
    }
    if let Some(threshold) = policy.no_loan_from {
        let _ = writeln!(out, "• {}", i18n::no_loan_rule(language, threshold));
    }
    out
}

/// month-by-month table
pub fn render_schedule(schedule: &AmortizationSchedule, language: Language) -> String {
    let t = labels(language);
    let mut out = String::new();
    let _ = writeln!(out, "{}", t.schedule);
    let _ = writeln!(
        out,
        "{:>4}  {:>14}  {:>14}  {:>14}  {:>16}",
        t.payment_no, t.installment, t.interest, t.principal, t.balance
    );
    for p in &schedule.payments {
        let _ = writeln!(
            out,
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>16}",
            p.payment_number,
            format_grouped(p.payment_amount),
            format_grouped(p.interest_portion),
            format_grouped(p.principal_portion),
            format_grouped(p.ending_balance)
        );
    }
    out
}
