use crate::domain::loan::LoanRequest;
use crate::domain::policy::RatePolicy;
use crate::domain::validator::LoanValidator;
use crate::domain::vehicle::{VehicleCondition, VehicleType};
use crate::error::{LoanError, Result, ValidationFailure};
use rust_decimal::Decimal;
use std::str::FromStr;

/// The six answers of a loan application, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawLoanInput {
    pub vehicle_type: String,
    pub vehicle_condition: String,
    pub vehicle_year: String,
    pub loan_amount: String,
    pub loan_tenor: String,
    pub down_payment: String,
}

/// Turns raw text into a [`LoanRequest`], one field at a time.
///
/// Fields are checked in the order they are asked for. The first rejected
/// field ends the application; later fields are never looked at.
#[derive(Debug, Clone, Copy)]
pub struct LoanIntake {
    validator: LoanValidator,
    policy: RatePolicy,
}

impl LoanIntake {
    pub fn new(validator: LoanValidator, policy: RatePolicy) -> Self {
        Self { validator, policy }
    }

    pub fn vehicle_type(&self, input: &str) -> Result<VehicleType> {
        let input = input.trim();
        ensure(
            self.validator.is_valid_vehicle_type(input),
            ValidationFailure::VehicleType,
        )?;
        input
            .parse()
            .map_err(|_| LoanError::InvalidVehicleType(input.to_string()))
    }

    pub fn vehicle_condition(&self, input: &str) -> Result<VehicleCondition> {
        let input = input.trim();
        ensure(
            self.validator.is_valid_vehicle_condition(input),
            ValidationFailure::VehicleCondition,
        )?;
        input
            .parse()
            .map_err(|_| ValidationFailure::VehicleCondition.into())
    }

    pub fn vehicle_year(&self, input: &str, condition: VehicleCondition) -> Result<i32> {
        let year: i32 = parse_field("vehicle year", input)?;
        ensure(
            self.validator.is_valid_year_four_digit(year),
            ValidationFailure::YearFormat,
        )?;
        ensure(
            self.validator.is_valid_year_compare_with_current_year(year),
            ValidationFailure::YearInFuture,
        )?;
        ensure(
            self.validator
                .is_valid_vehicle_if_new_condition(&condition.to_string(), year),
            ValidationFailure::NewVehicleYear,
        )?;
        Ok(year)
    }

    pub fn loan_amount(&self, input: &str) -> Result<Decimal> {
        let amount: Decimal = parse_field("loan amount", input)?;
        ensure(
            self.validator.is_valid_loan_amount(amount),
            ValidationFailure::LoanAmount,
        )?;
        Ok(amount)
    }

    pub fn loan_tenor(&self, input: &str) -> Result<u32> {
        let tenor: i32 = parse_field("loan tenor", input)?;
        ensure(
            self.validator.is_valid_loan_tenor(tenor),
            ValidationFailure::LoanTenor,
        )?;
        u32::try_from(tenor).map_err(|_| ValidationFailure::LoanTenor.into())
    }

    pub fn down_payment(&self, input: &str, loan_amount: Decimal) -> Result<Decimal> {
        let down_payment: Decimal = parse_field("down payment", input)?;
        ensure(
            self.validator.is_valid_down_payment_amount(
                down_payment,
                loan_amount,
                self.policy.minimum_down_payment_percent,
            ),
            ValidationFailure::DownPaymentBelowMinimum,
        )?;
        ensure(
            self.validator
                .is_down_payment_below_loan_amount(down_payment, loan_amount),
            ValidationFailure::DownPaymentNotBelowLoanAmount,
        )?;
        Ok(down_payment)
    }

    /// Validates all six fields in order.
    pub fn request(&self, raw: &RawLoanInput) -> Result<LoanRequest> {
        let vehicle_type = self.vehicle_type(&raw.vehicle_type)?;
        let vehicle_condition = self.vehicle_condition(&raw.vehicle_condition)?;
        let vehicle_year = self.vehicle_year(&raw.vehicle_year, vehicle_condition)?;
        let loan_amount = self.loan_amount(&raw.loan_amount)?;
        let loan_tenor_years = self.loan_tenor(&raw.loan_tenor)?;
        let down_payment = self.down_payment(&raw.down_payment, loan_amount)?;

        Ok(LoanRequest {
            vehicle_type,
            vehicle_condition,
            vehicle_year,
            loan_amount,
            loan_tenor_years,
            down_payment,
        })
    }
}

fn ensure(valid: bool, failure: ValidationFailure) -> Result<()> {
    if valid {
        Ok(())
    } else {
        tracing::warn!(%failure, "rejected loan input");
        Err(failure.into())
    }
}

fn parse_field<T: FromStr>(field: &'static str, input: &str) -> Result<T> {
    let input = input.trim();
    input.parse().map_err(|_| LoanError::MalformedNumericInput {
        field,
        value: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const YEAR: i32 = 2024;

    fn intake() -> LoanIntake {
        LoanIntake::new(
            LoanValidator::with_current_year(YEAR),
            RatePolicy::default(),
        )
    }

    fn raw() -> RawLoanInput {
        RawLoanInput {
            vehicle_type: "Car".to_string(),
            vehicle_condition: "new".to_string(),
            vehicle_year: YEAR.to_string(),
            loan_amount: "100000000".to_string(),
            loan_tenor: "3".to_string(),
            down_payment: "25000000".to_string(),
        }
    }

    fn failure(result: Result<LoanRequest>) -> ValidationFailure {
        match result {
            Err(LoanError::Validation(failure)) => failure,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = intake().request(&raw()).unwrap();
        assert_eq!(request.vehicle_type, VehicleType::Car);
        assert_eq!(request.vehicle_condition, VehicleCondition::New);
        assert_eq!(request.vehicle_year, YEAR);
        assert_eq!(request.loan_amount, dec!(100000000));
        assert_eq!(request.loan_tenor_years, 3);
        assert_eq!(request.down_payment, dec!(25000000));
    }

    #[test]
    fn test_rejects_unknown_vehicle_type() {
        let input = RawLoanInput {
            vehicle_type: "truck".to_string(),
            ..raw()
        };
        assert_eq!(failure(intake().request(&input)), ValidationFailure::VehicleType);
    }

    #[test]
    fn test_rejects_old_year_for_new_vehicle() {
        let input = RawLoanInput {
            vehicle_year: (YEAR - 2).to_string(),
            ..raw()
        };
        assert_eq!(
            failure(intake().request(&input)),
            ValidationFailure::NewVehicleYear
        );
    }

    #[test]
    fn test_accepts_old_year_for_old_vehicle() {
        let input = RawLoanInput {
            vehicle_condition: "old".to_string(),
            vehicle_year: "2015".to_string(),
            ..raw()
        };
        assert!(intake().request(&input).is_ok());
    }

    #[test]
    fn test_rejects_future_year_before_condition_check() {
        let input = RawLoanInput {
            vehicle_year: (YEAR + 1).to_string(),
            ..raw()
        };
        assert_eq!(
            failure(intake().request(&input)),
            ValidationFailure::YearInFuture
        );
    }

    #[test]
    fn test_rejects_three_digit_year() {
        let input = RawLoanInput {
            vehicle_condition: "old".to_string(),
            vehicle_year: "999".to_string(),
            ..raw()
        };
        assert_eq!(failure(intake().request(&input)), ValidationFailure::YearFormat);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let over_cap = RawLoanInput {
            loan_amount: "1000000001".to_string(),
            ..raw()
        };
        assert_eq!(failure(intake().request(&over_cap)), ValidationFailure::LoanAmount);

        let long_tenor = RawLoanInput {
            loan_tenor: "7".to_string(),
            ..raw()
        };
        assert_eq!(failure(intake().request(&long_tenor)), ValidationFailure::LoanTenor);

        let small_down = RawLoanInput {
            down_payment: "24999999.99".to_string(),
            ..raw()
        };
        assert_eq!(
            failure(intake().request(&small_down)),
            ValidationFailure::DownPaymentBelowMinimum
        );

        let full_down = RawLoanInput {
            down_payment: "100000000".to_string(),
            ..raw()
        };
        assert_eq!(
            failure(intake().request(&full_down)),
            ValidationFailure::DownPaymentNotBelowLoanAmount
        );
    }

    #[test]
    fn test_malformed_number() {
        let input = RawLoanInput {
            loan_amount: "lots".to_string(),
            ..raw()
        };
        let result = intake().request(&input);
        assert!(matches!(
            result,
            Err(LoanError::MalformedNumericInput { field: "loan amount", ref value }) if value == "lots"
        ));
    }
}
