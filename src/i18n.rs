//! English and Turkish display strings. Labels never affect calculations.

use crate::decimal::{Money, Rate};
use crate::format::{format_compact, format_percent, format_rate};
use crate::types::{HouseCategory, Language};

/// static label set for one language
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub bddk: &'static str,
    pub house_type: &'static str,
    pub secondhand: &'static str,
    pub new: &'static str,
    pub house_price: &'static str,
    pub loan_amount: &'static str,
    pub monthly_payment: &'static str,
    pub total_payment: &'static str,
    pub down_payment: &'static str,
    pub of_price: &'static str,
    pub secondhand_rules: &'static str,
    pub new_rules: &'static str,
    pub no_loan: &'static str,
    pub invalid_price: &'static str,
    pub schedule: &'static str,
    pub payment_no: &'static str,
    pub installment: &'static str,
    pub interest: &'static str,
    pub principal: &'static str,
    pub balance: &'static str,
}

static EN: Labels = Labels {
    title: "Mortgage Calculator",
    subtitle: "Turkey",
    bddk: "📋 BDDK Regulations",
    house_type: "House Type",
    secondhand: "Second-hand",
    new: "New",
    house_price: "House Price",
    loan_amount: "Loan Amount",
    monthly_payment: "Monthly Payment",
    total_payment: "Total Payment",
    down_payment: "Down Payment",
    of_price: "of price",
    secondhand_rules: "Second-hand Rules:",
    new_rules: "New House Rules:",
    no_loan: "No loan available",
    invalid_price: "Please enter a valid house price.",
    schedule: "Repayment Schedule",
    payment_no: "#",
    installment: "Payment",
    interest: "Interest",
    principal: "Principal",
    balance: "Balance",
};

static TR: Labels = Labels {
    title: "Mortgage Hesaplayıcı",
    subtitle: "Türkiye",
    bddk: "📋 BDDK Yönetmelikleri",
    house_type: "Ev Türü",
    secondhand: "İkinci El",
    new: "Yeni",
    house_price: "Ev Fiyatı",
    loan_amount: "Kredi Tutarı",
    monthly_payment: "Aylık Ödeme",
    total_payment: "Toplam Ödeme",
    down_payment: "Peşinat",
    of_price: "fiyatının",
    secondhand_rules: "İkinci El Kuralları:",
    new_rules: "Yeni Ev Kuralları:",
    no_loan: "Kredi bulunmamaktadır",
    invalid_price: "Lütfen geçerli bir ev fiyatı girin.",
    schedule: "Ödeme Planı",
    payment_no: "#",
    installment: "Taksit",
    interest: "Faiz",
    principal: "Anapara",
    balance: "Kalan",
};

/// label set for a language
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Tr => &TR,
    }
}

impl Labels {
    pub fn category(&self, category: HouseCategory) -> &'static str {
        match category {
            HouseCategory::Secondhand => self.secondhand,
            HouseCategory::New => self.new,
        }
    }

    pub fn rules_heading(&self, category: HouseCategory) -> &'static str {
        match category {
            HouseCategory::Secondhand => self.secondhand_rules,
            HouseCategory::New => self.new_rules,
        }
    }
}

/// "No loan available for houses 10M+ TRY"
pub fn no_loan_notice(language: Language, threshold: Option<Money>) -> String {
    match (language, threshold) {
        (Language::En, Some(t)) => format!("No loan available for houses {}+ TRY", format_compact(t)),
        (Language::Tr, Some(t)) => format!("{}+ TRY için kredi bulunmamaktadır", format_compact(t)),
        (_, None) => labels(language).no_loan.to_string(),
    }
}

/// "10 years @ 2.65% monthly"
pub fn terms_line(language: Language, term_years: u32, monthly_rate: Rate) -> String {
    match language {
        Language::En => format!("{} years @ {}% monthly", term_years, format_rate(monthly_rate)),
        Language::Tr => format!("{} yıl @ aylık %{}", term_years, format_rate(monthly_rate)),
    }
}

/// "60% of price" / "%60 fiyatının"
pub fn share_of_price(language: Language, ratio: Rate) -> String {
    let label = labels(language).of_price;
    match language {
        Language::En => format!("{}% {}", format_percent(ratio), label),
        Language::Tr => format!("%{} {}", format_percent(ratio), label),
    }
}

fn loan_share(language: Language, ratio: Rate) -> String {
    match language {
        Language::En => format!("{}% loan", format_percent(ratio)),
        Language::Tr => format!("%{} kredi", format_percent(ratio)),
    }
}

/// one tier rule, e.g. "Under 1M TRY: 90% loan" or "2M+ TRY: 50% loan (max 2.5M)"
pub fn tier_rule(
    language: Language,
    from: Money,
    until: Option<Money>,
    ratio: Rate,
    cap: Option<Money>,
) -> String {
    let share = loan_share(language, ratio);
    let range = match (from.is_zero(), until) {
        (true, Some(until)) => match language {
            Language::En => format!("Under {} TRY", format_compact(until)),
            Language::Tr => format!("{} TRY altı", format_compact(until)),
        },
        (false, Some(until)) => {
            format!("{}-{} TRY", strip_unit(&format_compact(from), &until), format_compact(until))
        }
        (true, None) => match language {
            Language::En => "All prices".to_string(),
            Language::Tr => "Tüm fiyatlar".to_string(),
        },
        (false, None) => format!("{}+ TRY", format_compact(from)),
    };

    match cap {
        Some(cap) => format!("{}: {} (max {})", range, share, format_compact(cap)),
        None => format!("{}: {}", range, share),
    }
}

/// "10M+ TRY: No loan available"
pub fn no_loan_rule(language: Language, threshold: Money) -> String {
    match language {
        Language::En => format!("{}+ TRY: No loan available", format_compact(threshold)),
        Language::Tr => format!("{}+ TRY: Kredi yok", format_compact(threshold)),
    }
}

// "1M-2M" reads as "1-2M" when both ends share the unit
fn strip_unit(from: &str, until: &Money) -> String {
    let until = format_compact(*until);
    match (from.chars().last(), until.chars().last()) {
        (Some(a), Some(b)) if a == b && a.is_alphabetic() => from[..from.len() - 1].to_string(),
        _ => from.to_string(),
    }
}
