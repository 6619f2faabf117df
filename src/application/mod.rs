//! Application layer: turning raw answers into a validated request and
//! running the amortization over it.
//!
//! `LoanIntake` applies the validator rules and produces a `LoanRequest`;
//! `LoanCalculator` turns that request into a yearly installment schedule.

pub mod calculator;
pub mod intake;
