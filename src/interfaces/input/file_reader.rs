use crate::application::intake::RawLoanInput;
use crate::error::{LoanError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const FIELD_COUNT: usize = 6;

/// Reads a loan application from a six-line text source.
///
/// Lines are trimmed and blank lines are skipped, so the six values may be
/// spread out with empty lines between them. Any other count is rejected.
pub struct LoanFileReader<R: Read> {
    reader: BufReader<R>,
}

impl LoanFileReader<File> {
    /// Opens the file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| LoanError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> LoanFileReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    pub fn read(self) -> Result<RawLoanInput> {
        let mut lines = Vec::with_capacity(FIELD_COUNT);
        for line in self.reader.lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        let [
            vehicle_type,
            vehicle_condition,
            vehicle_year,
            loan_amount,
            loan_tenor,
            down_payment,
        ]: [String; FIELD_COUNT] = lines
            .try_into()
            .map_err(|lines: Vec<String>| LoanError::InvalidFileFormat { lines: lines.len() })?;

        Ok(RawLoanInput {
            vehicle_type,
            vehicle_condition,
            vehicle_year,
            loan_amount,
            loan_tenor,
            down_payment,
        })
    }
}
