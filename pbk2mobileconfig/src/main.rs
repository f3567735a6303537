use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use pbk_core::ParseError;

use pbk2mobileconfig::cli::Cli;
use pbk2mobileconfig::convert::{run_convert, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_convert(&cli) {
        Ok(Outcome::Converted(count)) => {
            println!("converted {count} VPN configuration(s)");
            println!("output saved to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoRecords) => {
            eprintln!(
                "{} no VPN configurations found in {}",
                "error:".red().bold(),
                cli.input.display()
            );
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Distinct exit statuses so callers can tell a missing input (2) from an
/// undecodable one (3) and from any other failure (4). A parse that finds
/// zero entries exits 1 without going through an error.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ParseError>() {
        Some(ParseError::NotFound(_)) => 2,
        Some(ParseError::Decode(_)) => 3,
        _ => 4,
    }
}
