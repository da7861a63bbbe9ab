use crate::cli::{DEFAULT_LEFT_SUBFOLDER, DEFAULT_RIGHT_SUBFOLDER};
use crate::color::ColorMode;
use crate::data::loader::Study;
use crate::data::model::SliceSeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which side of the split view a pane occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    /// Title shown above the pane when the series carries no description.
    pub fn default_title(self) -> &'static str {
        match self {
            PaneSide::Left => "SERIES 01 (LEFT)",
            PaneSide::Right => "SERIES 02 (RIGHT)",
        }
    }
}

/// One viewer pane: a loaded series plus the slice cursor.
///
/// Invariant: while a series is loaded, `index` stays within
/// `[0, len - 1]`.
#[derive(Default)]
pub struct Pane {
    /// Loaded series (None until a folder is opened).
    pub series: Option<SliceSeries>,
    /// Index of the displayed slice.
    pub index: usize,
    /// Bumped whenever a new series is installed, so cached textures for
    /// the old series are invalidated even at an equal index.
    pub generation: u64,
}

impl Pane {
    /// Install a new series and reset the cursor to the middle slice.
    pub fn set_series(&mut self, series: SliceSeries) {
        self.index = series.len() / 2;
        self.generation += 1;
        self.series = Some(series);
    }

    /// Number of slices, zero when nothing is loaded.
    pub fn len(&self) -> usize {
        self.series.as_ref().map_or(0, |s| s.len())
    }

    /// Whether a series is loaded.
    pub fn is_loaded(&self) -> bool {
        self.series.is_some()
    }

    /// Step the cursor by `delta`, clamped to the valid slice range.
    pub fn step(&mut self, delta: i32) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let max = (len - 1) as i64;
        self.index = (self.index as i64 + i64::from(delta)).clamp(0, max) as usize;
    }

    /// Re-clamp the cursor, e.g. after the series changed underneath it.
    pub fn clamp_index(&mut self) {
        let len = self.len();
        if len > 0 && self.index > len - 1 {
            self.index = len - 1;
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub left: Pane,
    pub right: Pane,

    /// Active intensity mapping, shared by both panes.
    pub color_mode: ColorMode,

    /// Subfolder names used when opening a whole study directory.
    pub left_subfolder: String,
    pub right_subfolder: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            left: Pane::default(),
            right: Pane::default(),
            color_mode: ColorMode::Grayscale,
            left_subfolder: DEFAULT_LEFT_SUBFOLDER.to_string(),
            right_subfolder: DEFAULT_RIGHT_SUBFOLDER.to_string(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Install both series of a freshly loaded study.
    pub fn set_study(&mut self, study: Study) {
        self.left.set_series(study.left);
        self.right.set_series(study.right);
        self.status_message = None;
    }

    pub fn pane(&self, side: PaneSide) -> &Pane {
        match side {
            PaneSide::Left => &self.left,
            PaneSide::Right => &self.right,
        }
    }

    pub fn pane_mut(&mut self, side: PaneSide) -> &mut Pane {
        match side {
            PaneSide::Left => &mut self.left,
            PaneSide::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use crate::data::model::{Slice, SliceSeries, SortKey};

    use super::*;

    fn series_of(n: usize) -> SliceSeries {
        SliceSeries {
            slices: (0..n)
                .map(|i| Slice {
                    pixels: vec![0.0],
                    rows: 1,
                    columns: 1,
                    sort_key: SortKey::InstanceNumber(i as i32),
                    source: PathBuf::from(format!("{i}.dcm")),
                })
                .collect(),
            label: "test series".to_string(),
            modality: None,
            dir: PathBuf::from("."),
        }
    }

    #[rstest]
    #[case(1, 0)]
    #[case(9, 4)]
    #[case(10, 5)]
    fn set_series_starts_at_the_middle_slice(#[case] n: usize, #[case] expected: usize) {
        let mut pane = Pane::default();
        pane.set_series(series_of(n));
        assert_eq!(pane.index, expected);
    }

    #[test]
    fn step_moves_within_range() {
        let mut pane = Pane::default();
        pane.set_series(series_of(5));

        pane.step(1);
        assert_eq!(pane.index, 3);
        pane.step(-2);
        assert_eq!(pane.index, 1);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let mut pane = Pane::default();
        pane.set_series(series_of(3));

        pane.index = 2;
        pane.step(1);
        assert_eq!(pane.index, 2);

        pane.index = 0;
        pane.step(-1);
        assert_eq!(pane.index, 0);
    }

    #[test]
    fn step_without_series_is_a_noop() {
        let mut pane = Pane::default();
        pane.step(1);
        assert_eq!(pane.index, 0);
    }

    #[test]
    fn clamp_index_recovers_from_a_shorter_series() {
        let mut pane = Pane::default();
        pane.set_series(series_of(10));
        pane.index = 9;

        pane.series = Some(series_of(4));
        pane.clamp_index();
        assert_eq!(pane.index, 3);
    }

    #[test]
    fn set_series_bumps_the_generation() {
        let mut pane = Pane::default();
        pane.set_series(series_of(2));
        let first = pane.generation;
        pane.set_series(series_of(2));
        assert!(pane.generation > first);
    }

    #[test]
    fn set_study_fills_both_panes_and_clears_status() {
        let mut state = AppState::default();
        state.status_message = Some("Error: stale".to_string());

        state.set_study(Study {
            left: series_of(4),
            right: series_of(6),
        });

        assert_eq!(state.left.len(), 4);
        assert_eq!(state.right.len(), 6);
        assert_eq!(state.left.index, 2);
        assert_eq!(state.right.index, 3);
        assert!(state.status_message.is_none());
    }
}
