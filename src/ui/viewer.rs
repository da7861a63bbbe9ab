use eframe::egui::{self, Color32, ColorImage, RichText, TextureHandle, TextureOptions, Ui};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::color::{ColorMode, ACCENT};
use crate::data::model::Slice;
use crate::state::{AppState, Pane, PaneSide};

// ---------------------------------------------------------------------------
// Split view: two slice panes side by side (central panel)
// ---------------------------------------------------------------------------

/// Render both panes in the central panel.
pub fn split_view(ui: &mut Ui, state: &mut AppState, textures: &mut [SliceTexture; 2]) {
    if !state.left.is_loaded() && !state.right.is_loaded() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a study to compare series  (File → Open Study…)");
        });
        return;
    }

    let mode = state.color_mode;
    ui.columns(2, |columns| {
        slice_pane(
            &mut columns[0],
            &mut state.left,
            &mut textures[0],
            PaneSide::Left,
            mode,
        );
        slice_pane(
            &mut columns[1],
            &mut state.right,
            &mut textures[1],
            PaneSide::Right,
            mode,
        );
    });
}

// ---------------------------------------------------------------------------
// Single pane
// ---------------------------------------------------------------------------

/// Height reserved under the image for the readout and slider.
const FOOTER_HEIGHT: f32 = 64.0;

fn slice_pane(
    ui: &mut Ui,
    pane: &mut Pane,
    texture: &mut SliceTexture,
    side: PaneSide,
    mode: ColorMode,
) {
    pane.clamp_index();

    let title = pane
        .series
        .as_ref()
        .map(|s| match &s.modality {
            Some(m) => format!("{} [{m}]", s.label),
            None => s.label.clone(),
        })
        .unwrap_or_else(|| side.default_title().to_string());

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).heading().color(ACCENT).strong());
    });

    let len = pane.len();
    if len == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No series loaded.");
        });
        return;
    }

    // ---- Image ----
    let plot_id = match side {
        PaneSide::Left => "left_pane",
        PaneSide::Right => "right_pane",
    };

    let Some((tex_id, width, height)) = texture.get(ui.ctx(), pane, mode, plot_id) else {
        return;
    };

    let response = Plot::new(plot_id)
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid([false, false])
        .show_x(false)
        .show_y(false)
        .allow_scroll(false) // scroll is slice navigation, not plot zoom
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .height((ui.available_height() - FOOTER_HEIGHT).max(100.0))
        .show(ui, |plot_ui| {
            plot_ui.image(PlotImage::new(
                tex_id,
                PlotPoint::new(0.0, 0.0),
                egui::vec2(width, height),
            ));
        })
        .response;

    // Scroll over the image steps the slice cursor (up = next slice).
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll > 0.0 {
            pane.step(1);
        } else if scroll < 0.0 {
            pane.step(-1);
        }
    }

    // ---- Readout + slider ----
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Slice: {}/{}", pane.index + 1, len)).color(Color32::YELLOW),
        );
        ui.add(
            egui::Slider::new(&mut pane.index, 0..=len - 1).text(match side {
                PaneSide::Left => "S1",
                PaneSide::Right => "S2",
            }),
        );
    });
}

// ---------------------------------------------------------------------------
// Texture cache
// ---------------------------------------------------------------------------

/// Cached GPU texture for one pane, keyed by the slice it was uploaded for.
#[derive(Default)]
pub struct SliceTexture {
    handle: Option<TextureHandle>,
    key: Option<(u64, usize, ColorMode)>,
}

impl SliceTexture {
    /// Texture id and pixel dimensions for the pane's current slice,
    /// re-uploading only when the series, cursor, or color mode changed.
    fn get(
        &mut self,
        ctx: &egui::Context,
        pane: &Pane,
        mode: ColorMode,
        name: &str,
    ) -> Option<(egui::TextureId, f32, f32)> {
        let series = pane.series.as_ref()?;
        let slice = series.slices.get(pane.index)?;

        let key = (pane.generation, pane.index, mode);
        if self.key != Some(key) || self.handle.is_none() {
            self.handle = Some(ctx.load_texture(
                name,
                slice_to_color_image(slice, mode),
                TextureOptions::LINEAR,
            ));
            self.key = Some(key);
        }

        self.handle
            .as_ref()
            .map(|t| (t.id(), slice.columns as f32, slice.rows as f32))
    }
}

/// Map normalized intensities through the mode's lookup table.
fn slice_to_color_image(slice: &Slice, mode: ColorMode) -> ColorImage {
    let lut = mode.lut();
    let pixels = slice
        .pixels
        .iter()
        .map(|&v| lut[(v.clamp(0.0, 1.0) * 255.0) as usize])
        .collect();

    ColorImage {
        size: [slice.columns, slice.rows],
        pixels,
    }
}
