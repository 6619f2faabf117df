//! Domain types and rules for vehicle loans.

pub mod loan;
pub mod policy;
pub mod validator;
pub mod vehicle;
