// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::{IconData, ViewportBuilder};
use pos_tables::{config::state::AppState, gui, loge};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/table.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    pos_tables::log::init();

    let mut state = AppState::default();
    // Optional data file; without one the demo transactions are shown
    state.gui.source_path = std::env::args_os().nth(1).map(PathBuf::from);

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w, state.gui.window_h]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
