use std::fs;
use std::path::{Path, PathBuf};

use dicom_object::{open_file, InMemDicomObject};
use dicom_pixeldata::PixelDecoder;

use crate::error::{LoadError, Result};

use super::model::{sort_by_position, Slice, SliceSeries, SortKey};
use super::normalize::normalize_slice;
use super::tags::{self, get_float_value, get_int_value, get_string_value};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// A loaded study: the two series shown side by side.
#[derive(Debug, Clone)]
pub struct Study {
    pub left: SliceSeries,
    pub right: SliceSeries,
}

/// Load both series of a study. `left` and `right` are subfolder names of
/// `root`. Either series failing to load fails the whole study.
pub fn load_study(root: &Path, left: &str, right: &str) -> Result<Study> {
    let left = load_series(&root.join(left))?;
    let right = load_series(&root.join(right))?;
    Ok(Study { left, right })
}

/// Load one series folder: enumerate its files, decode every readable DICOM
/// slice, stable-sort by anatomical position, and contrast-normalize.
///
/// Unreadable files are skipped (logged at debug level); a folder yielding
/// no slices at all is an error.
pub fn load_series(dir: &Path) -> Result<SliceSeries> {
    if !dir.is_dir() {
        return Err(LoadError::FolderNotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .collect();
    // Deterministic enumeration so tie-breaking on equal sort keys is
    // reproducible across platforms.
    paths.sort();

    let mut slices = Vec::with_capacity(paths.len());
    let mut label: Option<String> = None;
    let mut modality: Option<String> = None;

    for path in paths {
        match read_slice(&path) {
            Ok((slice, desc, modal)) => {
                if label.is_none() {
                    label = desc;
                }
                if modality.is_none() {
                    modality = modal;
                }
                slices.push(slice);
            }
            Err(e) => log::debug!("skipping {}: {e}", path.display()),
        }
    }

    if slices.is_empty() {
        return Err(LoadError::NoReadableSlices(dir.to_path_buf()));
    }

    sort_by_position(&mut slices);
    for slice in &mut slices {
        normalize_slice(&mut slice.pixels);
    }

    let label = label.unwrap_or_else(|| {
        dir.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string())
    });

    log::info!("loaded {} slices from {}", slices.len(), dir.display());

    Ok(SliceSeries {
        slices,
        label,
        modality,
        dir: dir.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Per-file reading
// ---------------------------------------------------------------------------

/// Read one DICOM file into an unnormalized slice, plus the series
/// description and modality found in it.
fn read_slice(path: &Path) -> Result<(Slice, Option<String>, Option<String>)> {
    let obj = open_file(path)?;

    let decoded = obj.decode_pixel_data()?;
    let rows = decoded.rows() as usize;
    let columns = decoded.columns() as usize;

    // Multi-frame objects contribute their first frame only.
    let mut pixels: Vec<f32> = decoded.to_vec()?;
    pixels.truncate(rows * columns);

    let sort_key = extract_sort_key(&obj);
    let desc = get_string_value(&obj, tags::SERIES_DESCRIPTION);
    let modality = get_string_value(&obj, tags::MODALITY);

    Ok((
        Slice {
            pixels,
            rows,
            columns,
            sort_key,
            source: path.to_path_buf(),
        },
        desc,
        modality,
    ))
}

/// SliceLocation when present, else InstanceNumber, else unordered.
fn extract_sort_key(dcm: &InMemDicomObject) -> SortKey {
    if let Some(z) = get_float_value(dcm, tags::SLICE_LOCATION) {
        return SortKey::SliceLocation(z);
    }
    if let Some(n) = get_int_value(dcm, tags::INSTANCE_NUMBER) {
        return SortKey::InstanceNumber(n);
    }
    SortKey::Unordered
}

#[cfg(test)]
mod tests {
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("SE000001");

        let err = load_series(&missing).unwrap_err();
        assert!(matches!(err, LoadError::FolderNotFound(_)));
    }

    #[test]
    fn folder_without_readable_slices_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a dicom file").unwrap();

        let err = load_series(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoReadableSlices(_)));
    }

    #[test]
    fn subdirectories_are_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let err = load_series(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoReadableSlices(_)));
    }

    #[test]
    fn sort_key_prefers_slice_location() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            tags::SLICE_LOCATION,
            VR::DS,
            PrimitiveValue::from("4.5"),
        ));
        dcm.put(DataElement::new(
            tags::INSTANCE_NUMBER,
            VR::IS,
            PrimitiveValue::from("99"),
        ));

        assert_eq!(extract_sort_key(&dcm), SortKey::SliceLocation(4.5));
    }

    #[test]
    fn sort_key_falls_back_to_instance_number() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            tags::INSTANCE_NUMBER,
            VR::IS,
            PrimitiveValue::from("3"),
        ));

        assert_eq!(extract_sort_key(&dcm), SortKey::InstanceNumber(3));
    }

    #[test]
    fn sort_key_defaults_to_unordered() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(extract_sort_key(&dcm), SortKey::Unordered);
    }
}
