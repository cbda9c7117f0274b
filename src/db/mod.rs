pub mod repository;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, warn};

use crate::error::CatalogError;

/// Opens the database file at `path`, creating it and any missing parent
/// directories first.
pub async fn connect(path: &Path) -> Result<SqliteConnection, CatalogError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        let exists = tokio::fs::try_exists(dir).await.unwrap_or(false);
        if !exists {
            info!("Directory {} does not exist, creating it", dir.display());
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| CatalogError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }
    }

    debug!("Database path: {}", path.display());

    let conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await
        .map_err(CatalogError::Connection)?;

    info!("Connected to the SQLite database at {}", path.display());
    Ok(conn)
}

/// Closes a connection obtained from [`connect`]. Close failures are logged
/// and dropped; there is nothing useful a caller can do with them.
pub async fn release(conn: SqliteConnection) {
    match conn.close().await {
        Ok(()) => debug!("Database connection closed"),
        Err(e) => warn!("{}", CatalogError::Connection(e)),
    }
}
