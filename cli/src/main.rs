mod commands;
mod output;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: mode-order <ezfcf_output.txt>";

#[derive(Parser)]
#[command(name = "mode-order")]
#[command(about = "Derive the normal-mode order from an ezFCF parallel approximation report")]
#[command(version)]
pub struct Cli {
    #[arg(
        value_name = "REPORT",
        value_parser = clap::value_parser!(PathBuf),
        help = "Path to the ezFCF output text file"
    )]
    pub inputs: Vec<PathBuf>,
    #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,
    #[arg(long, help = "Skip the one-to-one permutation check")]
    pub no_validate: bool,
    #[arg(long, short, help = "Verbose mode: show where the matrix block was found")]
    pub verbose: bool,
    #[arg(long, value_name = "TEXT", help = "Section marker that precedes the matrix")]
    pub marker: Option<String>,
    #[arg(long, value_name = "PATH", help = "Read parse settings from a JSON file")]
    pub config: Option<String>,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return usage_error(),
    };

    let [path] = cli.inputs.as_slice() else {
        return usage_error();
    };

    let result = commands::order::run(
        path,
        cli.format,
        !cli.no_validate,
        cli.verbose,
        cli.marker,
        cli.config,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn usage_error() -> ExitCode {
    println!("{USAGE}");
    ExitCode::from(1)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
