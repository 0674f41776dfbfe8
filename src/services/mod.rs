// Service module exports

pub mod event_mutation;
pub mod grid_position;
pub mod overflow;
pub mod popup;
pub mod settings;
