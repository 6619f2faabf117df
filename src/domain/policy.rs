use crate::domain::vehicle::VehicleType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Interest-rate and down-payment policy, all values in percent.
///
/// Loaded once at start-up and passed by value; nothing mutates it afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(default)]
pub struct RatePolicy {
    pub base_rate_car: Decimal,
    pub base_rate_motorcycle: Decimal,
    /// Added on even-numbered loan years (2nd, 4th, 6th).
    pub increment_odd_year: Decimal,
    /// Added on odd-numbered loan years after the first (3rd, 5th).
    pub increment_even_year: Decimal,
    pub minimum_down_payment_percent: Decimal,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            base_rate_car: dec!(8),
            base_rate_motorcycle: dec!(9),
            increment_odd_year: dec!(0.1),
            increment_even_year: dec!(0.5),
            minimum_down_payment_percent: dec!(25),
        }
    }
}

impl RatePolicy {
    pub fn base_rate(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::Car => self.base_rate_car,
            VehicleType::Motorcycle => self.base_rate_motorcycle,
        }
    }

    /// Rate for loan year `year` (1-based) given the previous year's rate.
    ///
    /// Increments compound: each year builds on the rate of the year before.
    pub fn next_rate(&self, year: u32, previous: Decimal) -> Decimal {
        if year <= 1 {
            previous
        } else if year % 2 == 0 {
            previous + self.increment_odd_year
        } else {
            previous + self.increment_even_year
        }
    }

    /// Smallest down payment accepted for `loan_amount`.
    pub fn minimum_down_payment(&self, loan_amount: Decimal) -> Decimal {
        loan_amount * (self.minimum_down_payment_percent / dec!(100))
    }

    /// Names the first negative field, if any.
    pub fn first_negative_field(&self) -> Option<&'static str> {
        [
            ("base_rate_car", self.base_rate_car),
            ("base_rate_motorcycle", self.base_rate_motorcycle),
            ("increment_odd_year", self.increment_odd_year),
            ("increment_even_year", self.increment_even_year),
            ("minimum_down_payment_percent", self.minimum_down_payment_percent),
        ]
        .into_iter()
        .find(|(_, value)| *value < Decimal::ZERO)
        .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_selection() {
        let policy = RatePolicy::default();
        assert_eq!(policy.base_rate(VehicleType::Car), dec!(8));
        assert_eq!(policy.base_rate(VehicleType::Motorcycle), dec!(9));
    }

    #[test]
    fn test_rate_progression_compounds() {
        let policy = RatePolicy::default();
        let mut rate = policy.base_rate_car;
        let mut rates = Vec::new();
        for year in 1..=6 {
            rate = policy.next_rate(year, rate);
            rates.push(rate);
        }
        assert_eq!(
            rates,
            vec![dec!(8), dec!(8.1), dec!(8.6), dec!(8.7), dec!(9.2), dec!(9.3)]
        );
    }

    #[test]
    fn test_minimum_down_payment() {
        let policy = RatePolicy::default();
        assert_eq!(
            policy.minimum_down_payment(dec!(100000000)),
            dec!(25000000)
        );
    }

    #[test]
    fn test_first_negative_field() {
        assert_eq!(RatePolicy::default().first_negative_field(), None);

        let policy = RatePolicy {
            increment_even_year: dec!(-0.5),
            ..RatePolicy::default()
        };
        assert_eq!(policy.first_negative_field(), Some("increment_even_year"));
    }
}
