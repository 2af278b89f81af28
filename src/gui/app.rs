// src/gui/app.rs
use std::error::Error;

use chrono::NaiveDate;
use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, options::Delim, state::AppState},
    data::{self, DataSet, RowSelection},
    store,
    table::{Cell, DateNav, SortablePagedTable},
};

use super::components::{data_table, date_bar, detail_panel, pager};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical data + what the table currently shows
    pub data: DataSet,
    pub table: SortablePagedTable,
    /// Dataset row for each table row (table original index → dataset index)
    pub row_ix: Vec<usize>,

    pub date_nav: DateNav,
    pub date_col: Option<usize>,

    /// Dataset index of the clicked record
    pub selected: Option<usize>,
    pub source_label: String,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        let (data, source_label) = match state.gui.source_path.as_deref() {
            Some(p) => match store::load_table(p, &state.load) {
                Ok(ds) => {
                    status = format!("Loaded {} rows", ds.row_count());
                    (ds, p.display().to_string())
                }
                Err(e) => {
                    loge!("Load: {}", e);
                    status = format!("Load failed: {}", e);
                    (DataSet::default(), p.display().to_string())
                }
            },
            None => (data::demo_dataset(), s!("Demo: daily transactions")),
        };

        let date_col = date_column_for(&state, &data);
        let day = date_col
            .and_then(|c| data.latest_date(c))
            .unwrap_or_else(|| DateNav::today().date());

        let options = state.table.clone().date_column(date_col);
        let table = SortablePagedTable::with_options(data.headers.clone(), Vec::new(), options);

        logf!(
            "Init: {} ({} rows, {} cols, date column {:?})",
            source_label, data.row_count(), data.ncols(), date_col
        );

        let mut app = Self {
            state,
            data,
            table,
            row_ix: Vec::new(),
            date_nav: DateNav::new(day),
            date_col,
            selected: None,
            source_label,
            status,
        };
        app.refresh_rows();
        app
    }

    /// Day filter in effect, if any.
    fn day_filter(&self) -> Option<(usize, NaiveDate)> {
        if !self.state.gui.filter_by_date {
            return None;
        }
        self.date_col.map(|c| (c, self.date_nav.date()))
    }

    /// Push the current selection of dataset rows into the table.
    pub fn refresh_rows(&mut self) {
        let sel = match self.day_filter() {
            Some((col, day)) => RowSelection::on_day(&self.data, col, day),
            None => RowSelection::all(&self.data),
        };
        self.table.set_data(sel.to_owned_rows());
        self.row_ix = sel.row_ix;
        logd!("View: {} of {} rows", self.row_ix.len(), self.data.row_count());
    }

    pub fn reload(&mut self) {
        let Some(path) = self.state.gui.source_path.clone() else { return };
        match store::load_table(&path, &self.state.load) {
            Ok(ds) => {
                self.status = format!("Reloaded {} rows", ds.row_count());
                self.table.set_columns(ds.headers.clone());
                self.data = ds;
                self.selected = None;
                self.date_col = date_column_for(&self.state, &self.data);
                self.table.set_options(self.state.table.clone().date_column(self.date_col));
                logd!("Reload: date column {:?}", self.date_col);
                self.refresh_rows();
            }
            Err(e) => {
                loge!("Reload: {}", e);
                self.status = format!("Reload failed: {}", e);
            }
        }
    }

    /// Write the rows in current display order.
    pub fn export_view(&mut self) {
        let order: Vec<usize> = self
            .table
            .sorted_indices()
            .iter()
            .filter_map(|&i| self.row_ix.get(i).copied())
            .collect();
        let path = self.state.gui.export_path.clone();
        match store::save_table(&path, &self.data, &order, Delim::from_path(&path)) {
            Ok(()) => self.status = format!("Exported {} rows → {}", order.len(), path.display()),
            Err(e) => {
                loge!("Export: {}", e);
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    /// Table row clicked → remember its dataset row.
    pub fn select(&mut self, original_index: usize) {
        self.selected = self.row_ix.get(original_index).copied();
        logd!("Select: table row {} → dataset row {:?}", original_index, self.selected);
    }

    /// Table original index of the selected record, if it is in view.
    fn selected_in_view(&self) -> Option<usize> {
        let sel = self.selected?;
        self.row_ix.iter().position(|&ix| ix == sel)
    }

    fn selected_record(&self) -> Option<(usize, &[Cell])> {
        let ix = self.selected?;
        self.data.rows.get(ix).map(|r| (ix, r.as_slice()))
    }
}

/// Configured date column, else whatever the data looks like.
fn date_column_for(state: &AppState, data: &DataSet) -> Option<usize> {
    state.table.date_column.or_else(|| data.date_column())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.source_label).strong());
                if self.state.gui.source_path.is_some() && ui.button("Reload").clicked() {
                    self.reload();
                }
                if ui.button("Export view").clicked() {
                    self.export_view();
                }
                ui.checkbox(&mut self.state.gui.show_details, "Details");
            });

            if self.state.gui.show_date_bar && self.date_col.is_some() {
                ui.horizontal(|ui| {
                    let day_changed = date_bar::show(ui, &mut self.date_nav);
                    let toggled = ui.checkbox(&mut self.state.gui.filter_by_date, "Only this day").changed();
                    if toggled || (day_changed && self.state.gui.filter_by_date) {
                        self.refresh_rows();
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        if self.state.gui.show_details {
            egui::SidePanel::right("details")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    detail_panel::show(ui, &self.data.headers, self.selected_record());
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let highlight = self.selected_in_view();
            if let Some(ix) = data_table::show(ui, &mut self.table, highlight) {
                self.select(ix);
            }
            ui.separator();
            pager::show(ui, &mut self.table);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("pos_tables_app_{}", std::process::id()));
        let _ = fs::create_dir_all(&dir);
        dir.join(name)
    }

    #[test]
    fn reload_follows_moved_date_column() {
        let p = scratch("moved.csv");
        fs::write(&p, "Date,Item\n2024-01-10,Rice\n2024-01-10,Tea\n").unwrap();

        let mut state = AppState::default();
        state.gui.source_path = Some(p.clone());
        state.gui.filter_by_date = true;
        let mut app = App::new(state);
        assert_eq!(app.date_col, Some(0));
        assert_eq!(app.table.len(), 2);

        fs::write(&p, "Item,Date\nRice,2024-01-10\nTea,2024-01-10\n").unwrap();
        app.reload();
        assert_eq!(app.date_col, Some(1));
        assert_eq!(app.table.options().date_column, Some(1));
        assert_eq!(app.table.len(), 2);
        assert_eq!(app.row_ix, vec![0, 1]);
    }

    #[test]
    fn missing_file_shows_empty_table_and_status() {
        let mut state = AppState::default();
        state.gui.source_path = Some(scratch("nope.csv"));
        let app = App::new(state);
        assert!(app.table.is_empty());
        assert!(app.status.starts_with("Load failed"));
    }
}
