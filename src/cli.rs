//
// cli.rs
// dicom2json
//
// Argument handling and the stdout/stderr output contract: markers and payload on
// stdout, logs and error JSON on stderr.
//
// Thales Matheus Mendonça Santos - August 2026

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::logging::LOG_TARGET;
use crate::models::DicomRecord;
use crate::record;

/// Command-line surface: a single positional path, no flags.
#[derive(Parser)]
#[command(name = "dicom2json")]
#[command(about = "Converte um arquivo DICOM em um registro JSON com PNG embutido", long_about = None)]
pub struct Cli {
    /// Path to the DICOM file to convert
    pub file: PathBuf,
}

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("File path argument is required")]
    MissingFilePath,
}

/// Run the tool and return the process exit code. Stdout carries nothing but the
/// three-line success payload; every diagnostic goes to stderr.
pub fn run() -> i32 {
    // Any argument problem (none, too many, stray flags) is the same usage error,
    // reported before any file is touched and without a log call.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            // Fixed payload text, spaced exactly as the backend matches it.
            eprintln!("{{\"error\": \"{}\"}}", UsageError::MissingFilePath);
            return 1;
        }
    };

    match record::build(&cli.file) {
        Ok(record) => match emit_record(&record) {
            Ok(()) => 0,
            Err(err) => {
                report_failure(&err);
                1
            }
        },
        Err(err) => {
            report_failure(&err);
            1
        }
    }
}

fn emit_record(record: &DicomRecord) -> anyhow::Result<()> {
    let payload = serde_json::to_string(record)?;

    // The markers let the caller pick the JSON line out of stdout regardless of what
    // the surrounding process machinery prints.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "BEGIN_JSON_DATA")?;
    writeln!(stdout, "{}", payload)?;
    writeln!(stdout, "END_JSON_DATA")?;
    stdout.flush()?;
    Ok(())
}

fn report_failure(err: &anyhow::Error) {
    // Flat error taxonomy: every processing failure collapses into one message.
    error!(target: LOG_TARGET, "Error processing DICOM file: {:#}", err);
    emit_error_json(&format!("{:#}", err));
}

fn emit_error_json(message: &str) {
    eprintln!("{}", json!({ "error": message }));
}
