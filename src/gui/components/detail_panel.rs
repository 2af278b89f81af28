// src/gui/components/detail_panel.rs
use eframe::egui;

use crate::table::Cell;

/// Field/value grid for the clicked record.
pub fn show(ui: &mut egui::Ui, headers: &[String], record: Option<(usize, &[Cell])>) {
    ui.heading("Record");
    ui.separator();

    let Some((ix, cells)) = record else {
        ui.label("Click a row to see its details.");
        return;
    };

    ui.label(format!("Row #{}", ix + 1));
    egui::Grid::new("detail_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (ci, h) in headers.iter().enumerate() {
                ui.label(egui::RichText::new(h).strong());
                match cells.get(ci) {
                    Some(c) if !c.is_absent() => ui.label(c.display_text()),
                    _ => ui.weak("—"),
                };
                ui.end_row();
            }
        });
}
