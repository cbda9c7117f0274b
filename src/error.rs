use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to create database directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Schema error: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Seed error for course {title:?}: {source}")]
    Seed {
        title: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Coarse classification used in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Schema,
    Seed,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::CreateDir { .. } | CatalogError::Connection(_) => ErrorKind::Connection,
            CatalogError::Schema(_) => ErrorKind::Schema,
            CatalogError::Seed { .. } => ErrorKind::Seed,
        }
    }
}
