use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "cockpit.db";
pub const SEED_DIR_NAME: &str = "seed";
pub const SEED_FILE_NAME: &str = "cockpit_demo.db";

/// Resolved locations of the data directory, working database and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub seed_path: PathBuf,
}

impl AppConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            seed_path: data_dir.join(SEED_DIR_NAME).join(SEED_FILE_NAME),
            data_dir,
        }
    }
}
