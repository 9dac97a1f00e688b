use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AmortizationTerms;
use crate::decimal::{Money, Rate};

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub monthly_rate: Rate,
    pub number_of_payments: u32,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// get payment for specific period, numbered from 1
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        payment_number
            .checked_sub(1)
            .and_then(|i| self.payments.get(i as usize))
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}

/// fixed-rate annuity calculator
#[derive(Debug, Clone, Copy)]
pub struct AmortizationCalculator {
    terms: AmortizationTerms,
}

impl AmortizationCalculator {
    pub fn new(terms: AmortizationTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &AmortizationTerms {
        &self.terms
    }

    /// equal monthly installment for `principal`; zero for non-positive principal
    pub fn monthly_payment(&self, principal: Money) -> Money {
        if !principal.is_positive() {
            return Money::ZERO;
        }
        calculate_payment_amount(
            principal,
            self.terms.monthly_rate,
            self.terms.number_of_payments(),
        )
    }

    /// monthly payment times the number of installments
    pub fn total_payment(&self, principal: Money) -> Money {
        self.monthly_payment(principal) * Decimal::from(self.terms.number_of_payments())
    }

    /// total payment less the principal
    pub fn total_interest(&self, principal: Money) -> Money {
        if !principal.is_positive() {
            return Money::ZERO;
        }
        self.total_payment(principal) - principal
    }

    /// month-by-month breakdown of the equal installments
    pub fn schedule(&self, principal: Money) -> AmortizationSchedule {
        let monthly_rate = self.terms.monthly_rate;
        let term_months = self.terms.number_of_payments();
        let payments = if principal.is_positive() {
            self.calculate_equal_installments(principal, monthly_rate, term_months)
        } else {
            Vec::new()
        };

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        AmortizationSchedule {
            principal,
            monthly_rate,
            number_of_payments: term_months,
            payments,
            total_interest,
            total_payment,
        }
    }

    fn calculate_equal_installments(
        &self,
        principal: Money,
        monthly_rate: Rate,
        term_months: u32,
    ) -> Vec<ScheduledPayment> {
        let emi = calculate_payment_amount(principal, monthly_rate, term_months);

        let mut payments = Vec::with_capacity(term_months as usize);
        let mut balance = principal;
        let mut cumulative_interest = Money::ZERO;
        let mut cumulative_principal = Money::ZERO;

        for i in 1..=term_months {
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate.as_decimal());
            // the final installment settles whatever rounding left on the balance
            let principal_portion = if i == term_months {
                balance
            } else {
                (emi - interest_portion).min(balance)
            };
            let payment_amount = principal_portion + interest_portion;

            cumulative_interest += interest_portion;
            cumulative_principal += principal_portion;

            let ending_balance = balance - principal_portion;

            payments.push(ScheduledPayment {
                payment_number: i,
                beginning_balance: balance,
                payment_amount,
                principal_portion,
                interest_portion,
                ending_balance,
                cumulative_interest,
                cumulative_principal,
            });

            balance = ending_balance;
        }

        payments
    }
}

/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1), evaluated as
/// P * r / (1 - (1 + r)^-n) so the discount factor shrinks instead of growing
fn calculate_payment_amount(principal: Money, monthly_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return principal;
    }

    let r = monthly_rate.as_decimal();

    if r.is_zero() {
        return principal / Decimal::from(months);
    }

    let step = Decimal::ONE / (Decimal::ONE + r);
    let mut discount = Decimal::ONE;
    for _ in 0..months {
        discount *= step;
    }

    let numerator = principal.as_decimal() * r;
    let denominator = Decimal::ONE - discount;

    Money::from_decimal(numerator / denominator)
}
