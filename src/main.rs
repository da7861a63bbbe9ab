mod app;
mod cli;
mod color;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::TwinsliceApp;
use cli::Args;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    // With a study root on the command line, both series load before the
    // window opens; a bad folder aborts here instead of showing an empty
    // viewer.
    let mut state = AppState::default();
    state.left_subfolder = args.left.clone();
    state.right_subfolder = args.right.clone();

    if let Some(root) = &args.study_root {
        let study = data::loader::load_study(root, &args.left, &args.right)
            .with_context(|| format!("loading study {}", root.display()))?;
        state.set_study(study);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Twinslice – DICOM Series Viewer",
        options,
        Box::new(move |cc| {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
            cc.egui_ctx.set_visuals(visuals);
            Ok(Box::new(TwinsliceApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
