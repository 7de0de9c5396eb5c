//! Presentation: egui widgets over the derived views in [`crate::state`].

pub mod panels;
pub mod plot;
pub mod tables;
