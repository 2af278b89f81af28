// src/gui/components/date_bar.rs
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::table::DateNav;

/// ◀ [date] ▶ with a calendar popup. Returns true when the day changed.
pub fn show(ui: &mut egui::Ui, nav: &mut DateNav) -> bool {
    let before = nav.date();

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous day").clicked() {
            nav.prev_day();
        }

        let mut picked = nav.date();
        if ui.add(DatePickerButton::new(&mut picked).id_salt("date_bar")).changed() {
            nav.set_date(picked);
        }

        if ui.button("▶").on_hover_text("Next day").clicked() {
            nav.next_day();
        }

        ui.label(egui::RichText::new(nav.display()).strong());
    });

    nav.date() != before
}
