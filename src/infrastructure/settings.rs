//! Loads the rate policy.
//!
//! Values come from the built-in defaults, then an optional TOML file, then
//! `VEHICLE_LOAN_*` environment variables, each layer overriding the last.
use crate::domain::policy::RatePolicy;
use crate::error::Result;
use config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/loan.toml";
pub const ENV_PREFIX: &str = "VEHICLE_LOAN";

#[derive(Debug, PartialEq, Default)]
pub struct Settings {
    pub rate_policy: RatePolicy,
}

impl Settings {
    /// Reads settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when `None`.
    ///
    /// A missing default file is fine; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH)
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::from_config(
            Config::builder()
                .add_source(file)
                .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(false)),
        )
    }

    /// Parses settings from TOML text, without consulting the environment.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Self::from_config(
            Config::builder().add_source(File::from_str(contents, FileFormat::Toml)),
        )
    }

    fn from_config(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let rate_policy: RatePolicy = builder.build()?.try_deserialize()?;

        if let Some(field) = rate_policy.first_negative_field() {
            return Err(ConfigError::Message(format!("{field} must not be negative")).into());
        }

        tracing::info!(policy = ?rate_policy, "loaded rate policy");
        Ok(Self { rate_policy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoanError;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.rate_policy, RatePolicy::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml("base_rate_car = \"7.5\"\nincrement_odd_year = 0.25\n")
            .unwrap();
        assert_eq!(settings.rate_policy.base_rate_car, dec!(7.5));
        assert_eq!(settings.rate_policy.increment_odd_year, dec!(0.25));
        assert_eq!(settings.rate_policy.base_rate_motorcycle, dec!(9));
    }

    #[test]
    fn test_negative_value_rejected() {
        let result = Settings::from_toml("minimum_down_payment_percent = -5\n");
        assert!(matches!(result, Err(LoanError::Config(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_rate_motorcycle = 11").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.rate_policy.base_rate_motorcycle, dec!(11));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = Settings::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(LoanError::Config(_))));
    }
}
