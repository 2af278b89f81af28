// src/gui/components/pager.rs
//
// Pagination controls under the table:
// Previous | windowed page buttons | Next, page jump, page size, "Showing X to Y of Z".

use eframe::egui;

use crate::table::SortablePagedTable;

/// Returns true when the visible page changed.
pub fn show(ui: &mut egui::Ui, table: &mut SortablePagedTable) -> bool {
    let before = (table.current_page(), table.items_per_page());

    ui.horizontal(|ui| {
        if ui.add_enabled(table.has_prev(), egui::Button::new("Previous")).clicked() {
            table.prev_page();
        }

        let current = table.current_page();
        for n in table.page_numbers() {
            if ui.selectable_label(n == current, n.to_string()).clicked() {
                table.set_page(n);
            }
        }

        if ui.add_enabled(table.has_next(), egui::Button::new("Next")).clicked() {
            table.next_page();
        }

        ui.separator();

        // Jump to any page
        let mut page = table.current_page();
        egui::ComboBox::from_id_salt("pager_page")
            .selected_text(format!("Page {}", page))
            .show_ui(ui, |ui| {
                for p in table.all_pages() {
                    ui.selectable_value(&mut page, p, p.to_string());
                }
            });
        if page != table.current_page() {
            table.set_page(page);
        }

        let mut per = table.items_per_page();
        egui::ComboBox::from_id_salt("pager_size")
            .selected_text(format!("{} / page", per))
            .show_ui(ui, |ui| {
                for &n in table.page_size_choices() {
                    ui.selectable_value(&mut per, n, n.to_string());
                }
            });
        if per != table.items_per_page() {
            table.set_items_per_page(per);
        }

        ui.separator();

        let (first, last, total) = table.showing_range();
        ui.label(format!("Showing {} to {} of {}", first, last, total));
    });

    let after = (table.current_page(), table.items_per_page());
    if after != before {
        logd!("Pager: page {}/{} ({} per page)", after.0, table.total_pages(), after.1);
    }
    after != before
}
