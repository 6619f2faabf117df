use clap::Parser;
use miette::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vehicle_loan::application::calculator::LoanCalculator;
use vehicle_loan::application::intake::LoanIntake;
use vehicle_loan::domain::validator::LoanValidator;
use vehicle_loan::infrastructure::settings::Settings;
use vehicle_loan::interfaces::input::console::ConsolePrompter;
use vehicle_loan::interfaces::input::file_reader::LoanFileReader;
use vehicle_loan::interfaces::output::schedule_writer::{OutputFormat, ScheduleWriter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with six lines: type, condition, year, amount, tenor, down payment.
    /// Prompts on the console when omitted.
    input: Option<PathBuf>,

    /// Rate policy file (TOML). Defaults to config/loan.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the schedule.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log each computed year to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let policy = settings.rate_policy;
    let intake = LoanIntake::new(LoanValidator::new(), policy);

    let request = match cli.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading loan input file");
            let raw = LoanFileReader::open(&path)?.read()?;
            intake.request(&raw)?
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            ConsolePrompter::new(stdin.lock(), stdout.lock()).collect(&intake)?
        }
    };

    let schedule = LoanCalculator::new(policy).schedule(&request);
    tracing::info!(years = schedule.len(), "schedule computed");

    let stdout = io::stdout();
    let mut writer = ScheduleWriter::new(stdout.lock());
    writer.write_schedule(&schedule, cli.format)?;

    Ok(())
}
