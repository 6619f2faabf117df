use crate::domain::vehicle::{VehicleCondition, VehicleType};
use rust_decimal::Decimal;
use serde::Serialize;

/// A validated loan application, ready for the calculator.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct LoanRequest {
    pub vehicle_type: VehicleType,
    pub vehicle_condition: VehicleCondition,
    pub vehicle_year: i32,
    pub loan_amount: Decimal,
    pub loan_tenor_years: u32,
    pub down_payment: Decimal,
}

impl LoanRequest {
    /// Amount actually financed.
    pub fn principal(&self) -> Decimal {
        self.loan_amount - self.down_payment
    }
}

/// Monthly installment and annual rate for one loan year.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct InstallmentEntry {
    pub monthly_amount: Decimal,
    pub annual_rate: Decimal,
}

impl InstallmentEntry {
    pub fn new(monthly_amount: Decimal, annual_rate: Decimal) -> Self {
        Self {
            monthly_amount,
            annual_rate,
        }
    }
}

/// Full working for one loan year: what was owed, what was financed, what carries over.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct YearBreakdown {
    pub year: u32,
    pub opening_principal: Decimal,
    pub financed_amount: Decimal,
    pub closing_principal: Decimal,
    pub entry: InstallmentEntry,
}
