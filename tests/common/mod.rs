use chrono::Datelike;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Writes the six loan fields, one per line, to a temporary file.
pub fn write_loan_file(fields: [&str; 6]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for field in fields {
        writeln!(file, "{field}")?;
    }
    file.flush()?;
    Ok(file)
}
