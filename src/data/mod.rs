/// Data layer: DICOM reading, ordering, and contrast normalization.
///
/// Architecture:
/// ```text
///  series folder (one file per slice)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read DICOM files → decode pixel data → sort
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SliceSeries  │  Vec<Slice>, ascending by anatomical position
///   └─────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  percentile clip → rescale to [0, 1]
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod normalize;
pub mod tags;
