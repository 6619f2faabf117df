use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoanError>;

/// A single input rule that rejected the request.
///
/// Each variant maps to one validator predicate; the display text is the
/// message shown to the user before processing halts.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationFailure {
    #[error("Invalid vehicle type. Must be 'car' or 'motorcycle'.")]
    VehicleType,
    #[error("Invalid vehicle condition. Must be 'new' or 'old'.")]
    VehicleCondition,
    #[error("Invalid year. Must be a 4-digit number.")]
    YearFormat,
    #[error("Invalid vehicle year. Must be less or equals than current year.")]
    YearInFuture,
    #[error("Year for 'NEW' vehicle cannot be less than current year - 1.")]
    NewVehicleYear,
    #[error("Invalid amount. Must be a numeric value not exceeding 1 billion.")]
    LoanAmount,
    #[error("Invalid loan tenor. Must be between 1 and 6 years.")]
    LoanTenor,
    #[error("Down payment below allowable minimum.")]
    DownPaymentBelowMinimum,
    #[error("Down payment must be less than the loan amount.")]
    DownPaymentNotBelowLoanAmount,
}

#[derive(Error, Diagnostic, Debug)]
pub enum LoanError {
    #[error("{0}")]
    #[diagnostic(code(loan::validation))]
    Validation(ValidationFailure),

    #[error("Invalid vehicle type '{0}'. Must be 'car' or 'motorcycle'.")]
    #[diagnostic(code(loan::vehicle_type))]
    InvalidVehicleType(String),

    #[error("Invalid input format for {field}: '{value}'")]
    #[diagnostic(
        code(loan::input_format),
        help("enter numbers for year, loan amount, tenor, and down payment")
    )]
    MalformedNumericInput { field: &'static str, value: String },

    #[error("Invalid file format. File must contain 6 lines of input, found {lines}.")]
    #[diagnostic(
        code(loan::file_format),
        help("one value per line: type, condition, year, amount, tenor, down payment")
    )]
    InvalidFileFormat { lines: usize },

    #[error("Could not read file: {}", path.display())]
    #[diagnostic(code(loan::read_file))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    #[diagnostic(code(loan::config))]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationFailure> for LoanError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}
