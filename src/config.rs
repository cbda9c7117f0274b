use std::env;
use std::path::{Path, PathBuf};

pub const DATABASE_PATH_VAR: &str = "COURSES_DB_PATH";
pub const DEFAULT_DATABASE_DIR: &str = "/tmp";
pub const DEFAULT_DATABASE_FILE: &str = "my-database.db";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Config {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Reads `.env` when present, then `COURSES_DB_PATH`. A missing or blank
    /// value falls back to `/tmp/my-database.db`.
    pub fn new_from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_path = env::var(DATABASE_PATH_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        Self { database_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

pub fn default_database_path() -> PathBuf {
    Path::new(DEFAULT_DATABASE_DIR).join(DEFAULT_DATABASE_FILE)
}
