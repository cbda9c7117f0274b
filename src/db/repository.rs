use sqlx::SqliteConnection;

use crate::models::{Course, NewCourse, PLACEHOLDER_THUMBNAIL_URL};

pub const COURSES_TABLE: &str = "courses";

pub async fn table_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, sqlx::Error> {
    let found: Option<String> = sqlx::query_scalar(
        r#"
        SELECT name
        FROM sqlite_master
        WHERE type = 'table' AND name = ?1
        "#,
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(found.is_some())
}

pub async fn create_courses_table(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let statement = format!(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            videoUrl TEXT NOT NULL,
            thumbnailUrl TEXT DEFAULT '{PLACEHOLDER_THUMBNAIL_URL}',
            path TEXT NOT NULL,
            description TEXT
        )
        "#
    );

    sqlx::query(&statement).execute(&mut *conn).await?;
    Ok(())
}

/// Inserts `course` unless a row with the same title is already present.
/// The existence check and the write are one statement. An empty or missing
/// thumbnail is replaced with the placeholder by the statement itself.
///
/// Returns `true` when a row was written.
pub async fn insert_course_if_absent(
    conn: &mut SqliteConnection,
    course: &NewCourse<'_>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO courses (title, videoUrl, thumbnailUrl, path, description)
        SELECT ?1, ?2, COALESCE(NULLIF(?3, ''), ?6), ?4, ?5
        WHERE NOT EXISTS (SELECT 1 FROM courses WHERE title = ?1)
        "#,
    )
    .bind(course.title)
    .bind(course.video_url)
    .bind(course.thumbnail_url)
    .bind(course.path)
    .bind(course.description)
    .bind(PLACEHOLDER_THUMBNAIL_URL)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_by_title(conn: &mut SqliteConnection, title: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE title = ?1")
        .bind(title)
        .fetch_one(&mut *conn)
        .await
}

pub async fn count_courses(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(&mut *conn)
        .await
}

pub async fn fetch_courses(conn: &mut SqliteConnection) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT id, title, videoUrl, thumbnailUrl, path, description
        FROM courses
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await
}
