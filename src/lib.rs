// Month Grid Library
// Geometry and interaction engine for month calendar grids

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
