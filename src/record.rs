//
// record.rs
// dicom2json
//
// Runs the full conversion pipeline for one file: decode, normalize, render, extract.
//
// Thales Matheus Mendonça Santos - August 2026

use std::path::Path;

use anyhow::{Context, Result};
use dicom::object::{open_file, DefaultDicomObject};
use tracing::info;

use crate::logging::LOG_TARGET;
use crate::models::DicomRecord;
use crate::{encode, metadata, pixels};

/// Convert one DICOM file into the output record. Every failure along the way
/// propagates as-is; the CLI layer collapses them into the single error payload.
pub fn build(path: &Path) -> Result<DicomRecord> {
    info!(target: LOG_TARGET, "Processing DICOM file: {}", path.display());

    let obj: DefaultDicomObject = open_file(path).context("Falha ao abrir arquivo DICOM")?;

    let (raw, geometry) = pixels::decode_raw(&obj)?;
    let normalized = pixels::normalize(raw);
    let image = encode::to_payload(&normalized, &geometry)?;
    let record = metadata::build_record(&obj, image);

    info!(
        target: LOG_TARGET,
        "Successfully processed DICOM file for patient: {}", record.patient_name
    );

    Ok(record)
}
