//! UI layer for the desktop app: the egui shell and its transient form,
//! filter, and edit state.

pub mod app;

pub use app::RecipeDeskApp;
