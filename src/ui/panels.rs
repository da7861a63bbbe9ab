use std::path::PathBuf;

use anyhow::{bail, Context};
use eframe::egui::{self, Color32, RichText, Ui};
use image::GrayImage;

use crate::color::ColorMode;
use crate::data::loader;
use crate::state::{AppState, Pane, PaneSide};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open Study…").clicked() {
                open_study_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open Left Series…").clicked() {
                open_series_dialog(state, PaneSide::Left);
                ui.close_menu();
            }
            if ui.button("Open Right Series…").clicked() {
                open_series_dialog(state, PaneSide::Right);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Export Left Slice…").clicked() {
                export_slice_dialog(state, PaneSide::Left);
                ui.close_menu();
            }
            if ui.button("Export Right Slice…").clicked() {
                export_slice_dialog(state, PaneSide::Right);
                ui.close_menu();
            }
        });

        ui.separator();

        for mode in [ColorMode::Grayscale, ColorMode::Spectral] {
            if ui
                .selectable_label(state.color_mode == mode, mode.label())
                .clicked()
            {
                state.color_mode = mode;
            }
        }

        ui.separator();

        if state.left.is_loaded() || state.right.is_loaded() {
            ui.label(format!(
                "Left: {} slices | Right: {} slices",
                state.left.len(),
                state.right.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_study_dialog(state: &mut AppState) {
    let Some(root) = rfd::FileDialog::new()
        .set_title("Open study folder")
        .pick_folder()
    else {
        return;
    };

    match loader::load_study(&root, &state.left_subfolder, &state.right_subfolder) {
        Ok(study) => {
            log::info!(
                "loaded study {} ({} | {} slices)",
                root.display(),
                study.left.len(),
                study.right.len()
            );
            state.set_study(study);
        }
        Err(e) => {
            log::error!("failed to load study: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

fn open_series_dialog(state: &mut AppState, side: PaneSide) {
    let Some(dir) = rfd::FileDialog::new()
        .set_title("Open series folder")
        .pick_folder()
    else {
        return;
    };

    match loader::load_series(&dir) {
        Ok(series) => {
            state.status_message = None;
            state.pane_mut(side).set_series(series);
        }
        Err(e) => {
            log::error!("failed to load series: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}

fn export_slice_dialog(state: &mut AppState, side: PaneSide) {
    match export_slice(state.pane(side)) {
        Ok(Some(path)) => {
            log::info!("exported slice to {}", path.display());
            state.status_message = None;
        }
        Ok(None) => {} // dialog cancelled
        Err(e) => {
            log::error!("export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Ask for a target path and write the pane's current slice as an 8-bit
/// grayscale PNG. Returns the written path, or None when cancelled.
fn export_slice(pane: &Pane) -> anyhow::Result<Option<PathBuf>> {
    let Some(series) = &pane.series else {
        bail!("no series loaded");
    };
    let slice = &series.slices[pane.index];

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export slice as PNG")
        .add_filter("PNG image", &["png"])
        .set_file_name(format!("slice_{:03}.png", pane.index + 1))
        .save_file()
    else {
        return Ok(None);
    };

    let bytes: Vec<u8> = slice
        .pixels
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
        .collect();
    let img = GrayImage::from_raw(slice.columns as u32, slice.rows as u32, bytes)
        .context("slice buffer does not match its dimensions")?;
    img.save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(Some(path))
}
