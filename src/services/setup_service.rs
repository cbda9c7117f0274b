use std::path::Path;

use serde::Serialize;
use sqlx::SqliteConnection;
use tracing::{error, info, warn};

use crate::db::{self, repository};
use crate::error::CatalogError;
use crate::models::NewCourse;
use crate::seed::CATALOG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Outcome of [`setup_database`]. A phase that failed is `None`; its error
/// has already been logged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    pub schema: Option<SchemaStatus>,
    pub seed: Option<SeedReport>,
}

/// Creates the courses table when it is missing. An existing table is left
/// exactly as it is, whatever its columns.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<SchemaStatus, CatalogError> {
    let exists = repository::table_exists(conn, repository::COURSES_TABLE)
        .await
        .map_err(CatalogError::Schema)?;

    if exists {
        info!("Courses table already exists, skipping creation");
        return Ok(SchemaStatus::AlreadyExists);
    }

    info!("Creating courses table...");
    repository::create_courses_table(conn)
        .await
        .map_err(CatalogError::Schema)?;
    info!("Courses table initialized");

    Ok(SchemaStatus::Created)
}

/// Inserts each row whose title is not yet present, in order. A row that
/// fails is logged and counted, and the remaining rows are still attempted.
pub async fn seed(conn: &mut SqliteConnection, rows: &[NewCourse<'_>]) -> SeedReport {
    let mut report = SeedReport::default();

    for course in rows {
        match repository::insert_course_if_absent(conn, course).await {
            Ok(true) => {
                info!("Inserted course: {}", course.title);
                report.inserted += 1;
            }
            Ok(false) => {
                info!("Course {:?} already exists, skipping", course.title);
                report.skipped += 1;
            }
            Err(source) => {
                let err = CatalogError::Seed {
                    title: course.title.to_string(),
                    source,
                };
                warn!("{}", err);
                report.failed += 1;
            }
        }
    }

    info!(
        "Seeded courses - inserted: {}, skipped: {}, failed: {}",
        report.inserted, report.skipped, report.failed
    );
    report
}

/// Schema phase on its own connection.
pub async fn initialize_db(path: &Path) -> Result<SchemaStatus, CatalogError> {
    let mut conn = db::connect(path).await?;
    let result = ensure_schema(&mut conn).await;
    db::release(conn).await;
    result
}

/// Seed phase on its own connection.
pub async fn insert_seed_data(
    path: &Path,
    rows: &[NewCourse<'_>],
) -> Result<SeedReport, CatalogError> {
    let mut conn = db::connect(path).await?;
    let report = seed(&mut conn, rows).await;
    db::release(conn).await;
    Ok(report)
}

/// Creates the schema and loads the built-in catalog.
pub async fn setup_database(path: &Path) -> SetupReport {
    setup_database_with(path, CATALOG).await
}

/// Runs the schema phase then the seed phase. The phases do not share a
/// transaction, and a schema failure does not stop seeding from being tried.
pub async fn setup_database_with(path: &Path, rows: &[NewCourse<'_>]) -> SetupReport {
    info!("Step 1: Initializing database at {}", path.display());
    let schema = match initialize_db(path).await {
        Ok(status) => {
            info!("Database initialized successfully ({:?})", status);
            Some(status)
        }
        Err(e) => {
            error!("Error initializing the database ({:?}): {}", e.kind(), e);
            None
        }
    };

    info!("Step 2: Inserting seed data ({} courses)", rows.len());
    let seed = match insert_seed_data(path, rows).await {
        Ok(report) => {
            info!("Seed data inserted successfully");
            Some(report)
        }
        Err(e) => {
            error!("Error inserting seed data ({:?}): {}", e.kind(), e);
            None
        }
    };

    SetupReport { schema, seed }
}
