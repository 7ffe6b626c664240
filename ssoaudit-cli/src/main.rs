//! ssoaudit CLI - export IAM Identity Center users with their MFA devices

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use dialoguer::Input;

use ssoaudit_core::{export_csv, export_json, fetch_all_users_with_mfa_devices, SigV4Caller};

/// Export IAM Identity Center (SSO) users with their registered MFA devices
#[derive(Parser)]
#[command(name = "ssoaudit", version, about, long_about = None)]
struct Cli {
    /// Identity store ID (e.g. d-0123456789)
    #[arg(long)]
    identity_store_id: Option<String>,

    /// Region name (e.g. us-east-1)
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, default_value = "json")]
    format: Format,

    /// Output file (defaults to standard output)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let identity_store_id =
        require_input(cli.identity_store_id, "Identity store ID (e.g. d-0123456789)")?;
    let region = require_input(cli.region, "Region name (e.g. us-east-1)")?;

    let caller = SigV4Caller::new(&region)?;
    let users = fetch_all_users_with_mfa_devices(&caller, &identity_store_id, &region)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        Format::Csv => export_csv(&users, &mut writer)?,
        Format::Json => export_json(&users, &mut writer)?,
    }
    writer.flush()?;

    Ok(())
}

/// Use the flag value when given, otherwise prompt for it
fn require_input(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_json() {
        let cli = Cli::try_parse_from(["ssoaudit"]).unwrap();
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn test_format_accepts_mixed_case() {
        let cli = Cli::try_parse_from(["ssoaudit", "--format", "CSV"]).unwrap();
        assert_eq!(cli.format, Format::Csv);

        let cli = Cli::try_parse_from(["ssoaudit", "--format", "Json"]).unwrap();
        assert_eq!(cli.format, Format::Json);

        let cli = Cli::try_parse_from(["ssoaudit", "--format", "csv"]).unwrap();
        assert_eq!(cli.format, Format::Csv);
    }

    #[test]
    fn test_format_rejects_unknown_value() {
        let result = Cli::try_parse_from(["ssoaudit", "--format", "xml"]);
        assert!(result.is_err());
    }
}
