//! Order operations dashboard: filtering and aggregation over a static
//! snapshot of delivery orders, plus the egui front end that renders it.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
