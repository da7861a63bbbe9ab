use std::path::PathBuf;

use clap::Parser;

/// Series subfolder shown on the left when none is given on the command
/// line. Matches the layout of common scanner exports.
pub const DEFAULT_LEFT_SUBFOLDER: &str = "SE000001";
/// Series subfolder shown on the right.
pub const DEFAULT_RIGHT_SUBFOLDER: &str = "SE000003";

/// Side-by-side viewer for two DICOM series of one study.
#[derive(Debug, Parser)]
#[command(name = "twinslice", version, about)]
pub struct Args {
    /// Study directory containing one subfolder per series.
    ///
    /// When omitted the viewer starts empty and series are opened via
    /// File → Open.
    pub study_root: Option<PathBuf>,

    /// Subfolder of the study directory shown in the left pane.
    #[arg(long, default_value = DEFAULT_LEFT_SUBFOLDER)]
    pub left: String,

    /// Subfolder of the study directory shown in the right pane.
    #[arg(long, default_value = DEFAULT_RIGHT_SUBFOLDER)]
    pub right: String,
}
