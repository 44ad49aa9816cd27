//
// main.rs
// dicom2json
//
// Process entry point: installs the stderr logger and exits with the code produced by the CLI driver.
//
// Thales Matheus Mendonça Santos - August 2026

use dicom2json::{cli, logging};

fn main() {
    // Logs go to stderr only; stdout is reserved for the marker-delimited payload.
    logging::init();
    std::process::exit(cli::run());
}
