mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from cockpit for tests
pub use cockpit::core::db::{
    BomItem, BomRepository, Cell, Circuit, CircuitRepository, DashboardDb, InitOutcome, Project,
    ProjectRepository, ensure_initialized,
};
pub use cockpit::dashboard::{DashboardView, load_dashboard};
pub use cockpit::AppConfig;
