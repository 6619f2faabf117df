use crate::application::intake::LoanIntake;
use crate::domain::loan::LoanRequest;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Asks for each loan field in turn and validates it as soon as it is entered.
pub struct ConsolePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the interactive session. Stops at the first rejected answer.
    pub fn collect(&mut self, intake: &LoanIntake) -> Result<LoanRequest> {
        let answer = self.ask("Enter vehicle type (car/motorcycle): ")?;
        let vehicle_type = intake.vehicle_type(&answer)?;

        let answer = self.ask("Enter vehicle condition (new/old): ")?;
        let vehicle_condition = intake.vehicle_condition(&answer)?;

        let answer = self.ask("Enter vehicle year (4 digits): ")?;
        let vehicle_year = intake.vehicle_year(&answer, vehicle_condition)?;

        let answer = self.ask("Enter total loan amount (up to 1 billion): ")?;
        let loan_amount = intake.loan_amount(&answer)?;

        let answer = self.ask("Enter loan tenor (1-6 years): ")?;
        let loan_tenor_years = intake.loan_tenor(&answer)?;

        let answer = self.ask("Enter down payment amount: ")?;
        let down_payment = intake.down_payment(&answer, loan_amount)?;

        Ok(LoanRequest {
            vehicle_type,
            vehicle_condition,
            vehicle_year,
            loan_amount,
            loan_tenor_years,
            down_payment,
        })
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
