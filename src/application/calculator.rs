use crate::domain::loan::{InstallmentEntry, LoanRequest, YearBreakdown};
use crate::domain::policy::RatePolicy;
use crate::domain::vehicle::VehicleType;
use crate::error::{LoanError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: u32 = 12;

/// Computes yearly installment schedules for vehicle loans.
///
/// Interest is recalculated each year on the declining balance: the year's
/// interest is added to the outstanding principal up front, and that amount
/// is spread over every month still remaining in the tenor. The calculator
/// holds nothing but its [`RatePolicy`], so one instance can serve any number
/// of independent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanCalculator {
    policy: RatePolicy,
}

impl LoanCalculator {
    /// Creates a new `LoanCalculator` instance.
    ///
    /// # Arguments
    ///
    /// * `policy` - Base rates, yearly increments and down-payment floor.
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }

    /// Computes the schedule from loosely typed inputs.
    ///
    /// Everything except the vehicle type is assumed to have passed the
    /// validator already. The vehicle type is resolved here because it
    /// selects the base rate; an unknown type yields
    /// [`LoanError::InvalidVehicleType`] and no schedule at all.
    pub fn compute_schedule(
        &self,
        vehicle_type: &str,
        vehicle_condition: &str,
        vehicle_year: i32,
        loan_amount: Decimal,
        tenor_years: u32,
        down_payment: Decimal,
    ) -> Result<Vec<InstallmentEntry>> {
        let vehicle_type: VehicleType = vehicle_type
            .parse()
            .map_err(|_| LoanError::InvalidVehicleType(vehicle_type.to_string()))?;

        tracing::debug!(
            %vehicle_type,
            vehicle_condition,
            vehicle_year,
            %loan_amount,
            tenor_years,
            %down_payment,
            "computing schedule"
        );

        Ok(self
            .amortize(vehicle_type, loan_amount - down_payment, tenor_years)
            .into_iter()
            .map(|year| year.entry)
            .collect())
    }

    /// Computes the schedule for a validated request.
    pub fn schedule(&self, request: &LoanRequest) -> Vec<InstallmentEntry> {
        self.breakdown(request)
            .into_iter()
            .map(|year| year.entry)
            .collect()
    }

    /// Same computation as [`Self::schedule`], keeping the principal carried between years.
    pub fn breakdown(&self, request: &LoanRequest) -> Vec<YearBreakdown> {
        self.amortize(
            request.vehicle_type,
            request.principal(),
            request.loan_tenor_years,
        )
    }

    fn amortize(
        &self,
        vehicle_type: VehicleType,
        principal: Decimal,
        tenor_years: u32,
    ) -> Vec<YearBreakdown> {
        let mut rate = self.policy.base_rate(vehicle_type);
        let mut principal = principal;
        let mut months_remaining = Decimal::from(tenor_years * MONTHS_PER_YEAR);
        let months_per_year = Decimal::from(MONTHS_PER_YEAR);
        let mut years = Vec::with_capacity(tenor_years as usize);

        for year in 1..=tenor_years {
            rate = self.policy.next_rate(year, rate);

            let opening_principal = principal;
            let financed_amount = principal + principal * (rate / dec!(100));
            let mut monthly_amount = (financed_amount / months_remaining)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            monthly_amount.rescale(2);
            principal = financed_amount - monthly_amount * months_per_year;
            months_remaining -= months_per_year;

            tracing::debug!(
                year,
                %rate,
                %financed_amount,
                %monthly_amount,
                closing_principal = %principal,
                "computed loan year"
            );

            years.push(YearBreakdown {
                year,
                opening_principal,
                financed_amount,
                closing_principal: principal,
                entry: InstallmentEntry::new(monthly_amount, rate),
            });
        }

        if principal < Decimal::ZERO {
            tracing::debug!(residue = %principal, "schedule over-collects by rounding residue");
        }

        years
    }
}
