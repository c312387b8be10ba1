pub mod cable;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod render;

pub use cable::{CableInputs, CableSizing, Phases, SizingError, size_cable};
pub use config::AppConfig;
pub use crate::core::db::{InitOutcome, ensure_initialized};
pub use dashboard::{DashboardView, load_dashboard};
