//! Input rules for a loan application.
//!
//! Every predicate returns `true` when the input is acceptable. None of them
//! carry messages; mapping a rejection to user-facing text happens in
//! [`crate::application::intake`].

use crate::domain::vehicle::{VehicleCondition, VehicleType};
use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const MAX_LOAN_AMOUNT: Decimal = dec!(1000000000);
pub const MIN_TENOR_YEARS: i32 = 1;
pub const MAX_TENOR_YEARS: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanValidator {
    current_year: i32,
}

impl Default for LoanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanValidator {
    /// Validator anchored on the local clock's year.
    pub fn new() -> Self {
        Self::with_current_year(chrono::Local::now().year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn is_valid_vehicle_type(&self, vehicle_type: &str) -> bool {
        vehicle_type.parse::<VehicleType>().is_ok()
    }

    pub fn is_valid_vehicle_condition(&self, vehicle_condition: &str) -> bool {
        vehicle_condition.parse::<VehicleCondition>().is_ok()
    }

    pub fn is_valid_year_four_digit(&self, year: i32) -> bool {
        (1000..=9999).contains(&year)
    }

    pub fn is_valid_year_compare_with_current_year(&self, year: i32) -> bool {
        year <= self.current_year
    }

    /// A new vehicle must be from this year or last year. Other conditions pass.
    pub fn is_valid_vehicle_if_new_condition(&self, vehicle_condition: &str, year: i32) -> bool {
        match vehicle_condition.parse::<VehicleCondition>() {
            Ok(VehicleCondition::New) => {
                year == self.current_year || year == self.current_year - 1
            }
            _ => true,
        }
    }

    pub fn is_valid_loan_amount(&self, loan_amount: Decimal) -> bool {
        loan_amount > Decimal::ZERO && loan_amount <= MAX_LOAN_AMOUNT
    }

    pub fn is_valid_loan_tenor(&self, tenor_years: i32) -> bool {
        (MIN_TENOR_YEARS..=MAX_TENOR_YEARS).contains(&tenor_years)
    }

    pub fn is_valid_down_payment_amount(
        &self,
        down_payment: Decimal,
        loan_amount: Decimal,
        minimum_down_payment_percent: Decimal,
    ) -> bool {
        down_payment >= loan_amount * (minimum_down_payment_percent / dec!(100))
    }

    pub fn is_down_payment_below_loan_amount(
        &self,
        down_payment: Decimal,
        loan_amount: Decimal,
    ) -> bool {
        down_payment < loan_amount
    }
}
