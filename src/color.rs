use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Accent used for pane titles and highlights (sky blue on the dark theme).
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);

// ---------------------------------------------------------------------------
// Intensity lookup tables
// ---------------------------------------------------------------------------

/// Mapping from normalized intensity to display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Plain grayscale, the radiology default.
    Grayscale,
    /// False-color ramp for picking out subtle intensity differences.
    Spectral,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Grayscale => "Grayscale",
            ColorMode::Spectral => "Spectral",
        }
    }

    /// Build the 256-entry lookup table for this mode. Index 0 is the
    /// darkest intensity, index 255 the brightest.
    pub fn lut(self) -> Vec<Color32> {
        match self {
            ColorMode::Grayscale => (0..256).map(|i| Color32::from_gray(i as u8)).collect(),
            ColorMode::Spectral => spectral_lut(),
        }
    }
}

/// Hue ramp from deep blue (cold) to red (hot), built in HSL space and
/// brightening toward the hot end.
fn spectral_lut() -> Vec<Color32> {
    (0..256)
        .map(|i| {
            let t = i as f32 / 255.0;
            let hue = 240.0 * (1.0 - t);
            let hsl = Hsl::new(hue, 0.85, 0.15 + 0.55 * t);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luts_have_256_entries() {
        assert_eq!(ColorMode::Grayscale.lut().len(), 256);
        assert_eq!(ColorMode::Spectral.lut().len(), 256);
    }

    #[test]
    fn grayscale_endpoints_are_black_and_white() {
        let lut = ColorMode::Grayscale.lut();
        assert_eq!(lut[0], Color32::from_gray(0));
        assert_eq!(lut[255], Color32::from_gray(255));
    }

    #[test]
    fn spectral_ramp_is_darker_at_the_cold_end() {
        let lut = ColorMode::Spectral.lut();
        let luminance = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luminance(lut[0]) < luminance(lut[255]));
    }
}
