use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, viewer};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TwinsliceApp {
    pub state: AppState,
    /// Per-pane GPU texture caches (left, right).
    textures: [viewer::SliceTexture; 2],
}

impl TwinsliceApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            textures: Default::default(),
        }
    }
}

impl eframe::App for TwinsliceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the two slice panes ----
        egui::CentralPanel::default().show(ctx, |ui| {
            viewer::split_view(ui, &mut self.state, &mut self.textures);
        });
    }
}
