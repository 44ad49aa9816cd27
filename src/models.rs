//
// models.rs
// dicom2json
//
// Defines the serializable record emitted on stdout, keyed by DICOM attribute keywords.
//
// Thales Matheus Mendonça Santos - August 2026

use serde::{Deserialize, Serialize};

/// The flat record printed between the stdout markers. Field order here fixes the
/// serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DicomRecord {
    #[serde(rename = "PatientName")]
    pub patient_name: String,
    #[serde(rename = "StudyDate")]
    pub study_date: String,
    #[serde(rename = "StudyDescription")]
    pub study_description: String,
    #[serde(rename = "SeriesDescription")]
    pub series_description: String,
    #[serde(rename = "Modality")]
    pub modality: String,
    pub image: ImagePayload,
}

/// Rendered pixel data: base64 PNG bytes plus the frame dimensions in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub data: String,
    pub width: u32,
    pub height: u32,
}
