// Utility module exports
// Pure helpers shared by the grid services

pub mod date;
pub mod math;
