use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Slice Ordering Tags
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Series Description Tags
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get integer value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i32
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Helper to get float value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to f64
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_float64().ok())
}

#[cfg(test)]
mod tests {
    use dicom_core::{DataElement, PrimitiveValue, VR};

    use super::*;

    #[test]
    fn test_tag_values() {
        // Just ensure tags are correctly defined
        assert_eq!(SLICE_LOCATION, Tag(0x0020, 0x1041));
        assert_eq!(INSTANCE_NUMBER, Tag(0x0020, 0x0013));
        assert_eq!(SERIES_DESCRIPTION, Tag(0x0008, 0x103E));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
    }

    #[test]
    fn test_get_float_value_parses_decimal_string() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            SLICE_LOCATION,
            VR::DS,
            PrimitiveValue::from("-12.50"),
        ));

        assert_eq!(get_float_value(&dcm, SLICE_LOCATION), Some(-12.5));
    }

    #[test]
    fn test_get_int_value_parses_integer_string() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            INSTANCE_NUMBER,
            VR::IS,
            PrimitiveValue::from("7"),
        ));

        assert_eq!(get_int_value(&dcm, INSTANCE_NUMBER), Some(7));
    }

    #[test]
    fn test_get_string_value_trims_padding() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from("T2 AXIAL "),
        ));

        assert_eq!(
            get_string_value(&dcm, SERIES_DESCRIPTION),
            Some("T2 AXIAL".to_string())
        );
    }

    #[test]
    fn test_missing_tag_returns_none() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(get_string_value(&dcm, SERIES_DESCRIPTION), None);
        assert_eq!(get_int_value(&dcm, INSTANCE_NUMBER), None);
        assert_eq!(get_float_value(&dcm, SLICE_LOCATION), None);
    }
}
