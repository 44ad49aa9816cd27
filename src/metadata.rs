use chrono::Local;
use dicom::core::Tag;

use crate::dicom_access::ElementAccess;
use crate::models::{DicomRecord, ImagePayload};

fn text_for_tag<T: ElementAccess>(obj: &T, tag: Tag) -> Option<String> {
    obj.element_str(tag)
}

fn today_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// Assemble the output record from the dataset, substituting the documented defaults
/// for absent attributes. Absence is never an error here.
pub fn build_record<T: ElementAccess>(obj: &T, image: ImagePayload) -> DicomRecord {
    DicomRecord {
        patient_name: text_for_tag(obj, Tag(0x0010, 0x0010)).unwrap_or_else(|| "Unknown".into()),
        study_date: text_for_tag(obj, Tag(0x0008, 0x0020)).unwrap_or_else(today_stamp),
        study_description: text_for_tag(obj, Tag(0x0008, 0x1030)).unwrap_or_default(),
        series_description: text_for_tag(obj, Tag(0x0008, 0x103E)).unwrap_or_default(),
        modality: text_for_tag(obj, Tag(0x0008, 0x0060)).unwrap_or_else(|| "Unknown".into()),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{DataElement, PrimitiveValue, VR};
    use dicom::object::InMemDicomObject;

    fn dummy_image() -> ImagePayload {
        ImagePayload {
            data: String::new(),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_record_uses_present_fields() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            PrimitiveValue::from("Test^Patient"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x0020),
            VR::DA,
            PrimitiveValue::from("20240101"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x1030),
            VR::LO,
            PrimitiveValue::from("Chest CT"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x103E),
            VR::LO,
            PrimitiveValue::from("Axial"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            PrimitiveValue::from("CT"),
        ));

        let record = build_record(&obj, dummy_image());
        assert_eq!(record.patient_name, "Test^Patient");
        assert_eq!(record.study_date, "20240101");
        assert_eq!(record.study_description, "Chest CT");
        assert_eq!(record.series_description, "Axial");
        assert_eq!(record.modality, "CT");
    }

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let obj = InMemDicomObject::new_empty();
        let record = build_record(&obj, dummy_image());

        assert_eq!(record.patient_name, "Unknown");
        assert_eq!(record.modality, "Unknown");
        assert_eq!(record.study_description, "");
        assert_eq!(record.series_description, "");
        // Default StudyDate is the current local date, eight digits.
        assert_eq!(record.study_date.len(), 8);
        assert!(record.study_date.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_record_serializes_with_dicom_keywords() {
        let obj = InMemDicomObject::new_empty();
        let record = build_record(&obj, dummy_image());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["PatientName"], "Unknown");
        assert_eq!(value["image"]["width"], 1);
        assert_eq!(value["image"]["height"], 1);
    }
}
