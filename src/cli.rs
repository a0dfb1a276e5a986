//! Command-line interface.

use crate::common::Error;
use crate::deck::config::{DEFAULT_LOGO, DEFAULT_OUTPUT};
use crate::deck::{DeckBuilder, DeckConfig, GenerationReport};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(
    name = "nokia-deck",
    version,
    about = "Generate the \"Nokia: Why Did It Fail?\" presentation"
)]
pub struct Cli {
    /// Output .pptx file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Logo image for the title slide; a placeholder is drawn if it does not exist
    #[arg(long, default_value = DEFAULT_LOGO)]
    pub logo: PathBuf,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Deck settings with the command-line overrides applied.
    pub fn config(&self) -> DeckConfig {
        DeckConfig::default()
            .with_output(&self.output)
            .with_logo(&self.logo)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Generate the deck and print the outcome to `out`.
///
/// Progress, the success banner and error details all go to `out`; the
/// exit code is `FAILURE` when generation fails or `out` cannot be written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> ExitCode {
    debug!(?cli, "starting");

    let mut builder = DeckBuilder::new(cli.config());
    let outcome = builder.generate(out);
    let printed = match &outcome {
        Ok(report) => print_success(out, report),
        Err(e) => {
            error!(error = %e, "generation failed");
            print_failure(out, e)
        },
    };

    match (outcome, printed) {
        (Ok(_), Ok(())) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn print_success<W: Write>(out: &mut W, report: &GenerationReport) -> io::Result<()> {
    writeln!(out, "\n✅ SUCCESS: Nokia presentation generated successfully!")?;
    writeln!(out, "📁 File location: {}", absolute(&report.output_path).display())
}

fn print_failure<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, "❌ ERROR: Failed to generate presentation")?;
    writeln!(out, "Error details: {}", err)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> (ExitCode, String) {
        let cli = Cli::parse_from(args.iter().copied());
        let mut out = Vec::new();
        let code = run(&cli, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_defaults_match_fixed_deck() {
        let cli = Cli::parse_from(["nokia-deck"]);
        assert_eq!(cli.config(), DeckConfig::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["nokia-deck", "-o", "out.pptx", "--logo", "brand.png", "-vv"]);
        let config = cli.config();
        assert_eq!(config.output_path, PathBuf::from("out.pptx"));
        assert_eq!(config.logo_path, PathBuf::from("brand.png"));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_run_reports_failure_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("deck.pptx");
        let logo = dir.path().join("nokia_logo.png");

        let (code, printed) = run_to_string(&[
            "nokia-deck",
            "--output",
            output.to_str().unwrap(),
            "--logo",
            logo.to_str().unwrap(),
        ]);

        assert_eq!(code, ExitCode::FAILURE);
        let lines: Vec<&str> = printed.lines().collect();
        let banner = lines
            .iter()
            .position(|line| *line == "❌ ERROR: Failed to generate presentation")
            .unwrap();
        assert!(lines[banner + 1].starts_with("Error details: "));
        assert!(lines[banner + 1].len() > "Error details: ".len());
        assert!(!printed.contains("SUCCESS"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_reports_saved_location() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deck.pptx");
        let logo = dir.path().join("nokia_logo.png");

        let (code, printed) = run_to_string(&[
            "nokia-deck",
            "-o",
            output.to_str().unwrap(),
            "--logo",
            logo.to_str().unwrap(),
        ]);

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(printed.contains("\n✅ SUCCESS: Nokia presentation generated successfully!\n"));
        assert!(printed.ends_with(&format!("📁 File location: {}\n", output.display())));
        assert!(output.exists());
    }
}
