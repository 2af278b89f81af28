// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod data;
pub mod store;
pub mod table;

pub mod gui;
