//
// lib.rs
// dicom2json
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - August 2026

// Public surface of the library: each module mirrors one step of the conversion pipeline.
pub mod cli;
pub mod dicom_access;
pub mod encode;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod pixels;
pub mod record;

pub use cli::{run as run_cli, Cli};
