// src/gui/components/mod.rs
pub mod data_table;
pub mod date_bar;
pub mod detail_panel;
pub mod pager;
