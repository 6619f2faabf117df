pub mod console;
pub mod file_reader;
