// src/gui/components/data_table.rs
//
// Draws one page of a SortablePagedTable.
// Sort arrows only on sortable columns; rows are clickable and report the
// row's original index, never its display position.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{HEADER_HEIGHT, MIN_COLUMN_WIDTH, ROW_HEIGHT};
use crate::table::{Cell, SortDirection, SortablePagedTable, TableBody};

/// Draw the current page. `selected` is an original index to highlight.
/// Returns the original index of a clicked row (the row-click callback, if
/// any, has already run).
pub fn show(ui: &mut egui::Ui, table: &mut SortablePagedTable, selected: Option<usize>) -> Option<usize> {
    let mut sort_req: Option<(usize, SortDirection)> = None;
    let mut clicked_pos: Option<usize> = None;

    let opts = table.options();
    let max_h = opts.max_height.unwrap_or(f32::INFINITY);
    let max_w = opts.max_width;

    let ncols = table.ncols().max(1);
    let columns = table.columns().to_vec();
    let directive = table.sort_directive();
    let sortable: Vec<bool> = (0..ncols).map(|c| table.is_sortable(c)).collect();

    ui.scope(|ui| {
        if let Some(w) = max_w {
            ui.set_max_width(w);
        }
        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);

        let mut builder = TableBuilder::new(ui)
            .id_salt("sortable_paged_table")
            .striped(true)
            .sense(egui::Sense::click())
            .max_scroll_height(max_h)
            .cell_layout(Layout::left_to_right(Align::Center));
        for _ in 0..ncols {
            builder = builder.column(Column::auto().at_least(MIN_COLUMN_WIDTH).resizable(true).clip(true));
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                for ci in 0..ncols {
                    header.col(|ui| {
                        let label = columns.get(ci).map(String::as_str).unwrap_or("");
                        ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        if sortable[ci] {
                            for dir in [SortDirection::Ascending, SortDirection::Descending] {
                                let active = directive.direction_for(ci) == Some(dir);
                                if ui.selectable_label(active, dir.arrow()).clicked() {
                                    sort_req = Some((ci, dir));
                                }
                            }
                        }
                    });
                }
            })
            .body(|body| match table.body() {
                // drawn below the header at full width
                TableBody::Empty(_) => {}
                TableBody::Rows(rows) => {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let pos = row.index();
                        let Some(r) = rows.get(pos) else { return };
                        row.set_selected(selected == Some(r.original_index));
                        for cell in r.cells_for(ncols) {
                            row.col(|ui| draw_cell(ui, cell));
                        }
                        if row.response().clicked() {
                            clicked_pos = Some(pos);
                        }
                    });
                }
            });

        if let TableBody::Empty(msg) = table.body() {
            empty_row(ui, msg);
        }
    });

    if let Some((col, dir)) = sort_req {
        logd!("Table: sort request col={} {:?}", col, dir);
        table.request_sort(col, dir);
    }
    clicked_pos.and_then(|pos| table.click(pos))
}

/// One centered row across the whole table width.
fn empty_row(ui: &mut egui::Ui, msg: &str) -> egui::Response {
    let width = ui.available_width();
    ui.add_sized([width, ROW_HEIGHT], egui::Label::new(RichText::new(msg).italics()).selectable(false))
}

fn draw_cell(ui: &mut egui::Ui, cell: &Cell) {
    let text = cell.display_text();
    let label = egui::Label::new(text).selectable(false);
    if matches!(cell, Cell::Number(_)) {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.add(label); });
    } else {
        ui.add(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable;

    #[test]
    fn empty_message_spans_the_table_width() {
        let mut h = Harness::new_ui_state(
            |ui, spans: &mut bool| {
                let avail = ui.available_width();
                let r = empty_row(ui, "No Data Available");
                *spans = avail > MIN_COLUMN_WIDTH && (r.rect.width() - avail).abs() < 1.0;
            },
            false,
        );
        h.run();
        assert!(*h.state());
        h.get_by_label("No Data Available");
    }
}
