use std::path::{Path, PathBuf};

use catalog_seeder::db::{self, repository};
use catalog_seeder::models::{NewCourse, PLACEHOLDER_THUMBNAIL_URL};
use catalog_seeder::seed::CATALOG;
use catalog_seeder::services::{self, SchemaStatus, SeedReport};
use catalog_seeder::{ErrorKind, setup_database};
use tempfile::TempDir;

fn temp_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("courses.db");
    (dir, path)
}

async fn course_count(path: &Path) -> i64 {
    let mut conn = db::connect(path).await.expect("Failed to connect");
    let count = repository::count_courses(&mut conn)
        .await
        .expect("Failed to count courses");
    db::release(conn).await;
    count
}

#[tokio::test]
async fn test_setup_on_empty_store() {
    let (_dir, path) = temp_db();

    let report = setup_database(&path).await;

    assert_eq!(report.schema, Some(SchemaStatus::Created));
    assert_eq!(
        report.seed,
        Some(SeedReport {
            inserted: 72,
            skipped: 0,
            failed: 0,
        })
    );
    assert_eq!(course_count(&path).await, 72);
}

#[tokio::test]
async fn test_setup_is_idempotent() {
    let (_dir, path) = temp_db();

    setup_database(&path).await;
    let second = setup_database(&path).await;

    assert_eq!(second.schema, Some(SchemaStatus::AlreadyExists));
    assert_eq!(
        second.seed,
        Some(SeedReport {
            inserted: 0,
            skipped: 72,
            failed: 0,
        })
    );
    assert_eq!(course_count(&path).await, 72);
}

#[tokio::test]
async fn test_every_catalog_title_exists_once() {
    let (_dir, path) = temp_db();
    setup_database(&path).await;

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    for course in CATALOG {
        let count = repository::count_by_title(&mut conn, course.title)
            .await
            .expect("Failed to count title");
        assert_eq!(count, 1, "title {:?}", course.title);
    }

    let courses = repository::fetch_courses(&mut conn)
        .await
        .expect("Failed to fetch courses");
    db::release(conn).await;

    let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
    let expected: Vec<&str> = CATALOG.iter().map(|c| c.title).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_existing_title_is_kept_and_not_updated() {
    let (_dir, path) = temp_db();
    services::initialize_db(&path)
        .await
        .expect("Failed to initialize schema");

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    sqlx::query("INSERT INTO courses (title, videoUrl, path) VALUES (?1, ?2, ?3)")
        .bind("DSA Course 1")
        .bind("https://existing-video.example")
        .bind("Legacy")
        .execute(&mut conn)
        .await
        .expect("Failed to insert course");
    db::release(conn).await;

    let report = setup_database(&path).await;

    assert_eq!(report.schema, Some(SchemaStatus::AlreadyExists));
    assert_eq!(
        report.seed,
        Some(SeedReport {
            inserted: 71,
            skipped: 1,
            failed: 0,
        })
    );

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    let sql = "SELECT videoUrl FROM courses WHERE title = 'DSA Course 1'";
    let video_urls: Vec<String> = sqlx::query_scalar(sql)
        .fetch_all(&mut conn)
        .await
        .expect("Failed to query course");
    let total = repository::count_courses(&mut conn)
        .await
        .expect("Failed to count courses");
    db::release(conn).await;

    assert_eq!(video_urls, vec!["https://existing-video.example"]);
    assert_eq!(total, 72);
}

#[tokio::test]
async fn test_missing_thumbnail_gets_placeholder() {
    let (_dir, path) = temp_db();
    let rows = [
        NewCourse {
            title: "Empty Thumbnail",
            video_url: "https://video.example/1",
            thumbnail_url: Some(""),
            path: "DSA",
            description: None,
        },
        NewCourse {
            title: "No Thumbnail",
            video_url: "https://video.example/2",
            thumbnail_url: None,
            path: "DevOps",
            description: Some("Pipelines"),
        },
        NewCourse {
            title: "Own Thumbnail",
            video_url: "https://video.example/3",
            thumbnail_url: Some("https://thumbs.example/3.png"),
            path: "DevOps",
            description: None,
        },
    ];

    let report = services::setup_database_with(&path, &rows).await;
    assert_eq!(report.seed.map(|s| s.inserted), Some(3));

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    let courses = repository::fetch_courses(&mut conn)
        .await
        .expect("Failed to fetch courses");
    db::release(conn).await;

    assert_eq!(courses.len(), 3);
    let placeholder = Some(PLACEHOLDER_THUMBNAIL_URL);
    assert_eq!(courses[0].thumbnail_url.as_deref(), placeholder);
    assert_eq!(courses[1].thumbnail_url.as_deref(), placeholder);
    let own = Some("https://thumbs.example/3.png");
    assert_eq!(courses[2].thumbnail_url.as_deref(), own);
    assert_eq!(courses[1].description.as_deref(), Some("Pipelines"));
    assert_eq!(courses[0].description, None);
}

#[tokio::test]
async fn test_schema_default_applies_when_column_omitted() {
    let (_dir, path) = temp_db();
    services::initialize_db(&path)
        .await
        .expect("Failed to initialize schema");

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    sqlx::query("INSERT INTO courses (title, videoUrl, path) VALUES ('a', 'b', 'c')")
        .execute(&mut conn)
        .await
        .expect("Failed to insert course");
    let thumbnail: Option<String> = sqlx::query_scalar("SELECT thumbnailUrl FROM courses")
        .fetch_one(&mut conn)
        .await
        .expect("Failed to read thumbnail");
    db::release(conn).await;

    assert_eq!(thumbnail.as_deref(), Some(PLACEHOLDER_THUMBNAIL_URL));
}

#[tokio::test]
async fn test_existing_table_with_other_columns_is_left_alone() {
    let (_dir, path) = temp_db();

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    sqlx::query("CREATE TABLE courses (id INTEGER PRIMARY KEY, title TEXT NOT NULL, legacy TEXT)")
        .execute(&mut conn)
        .await
        .expect("Failed to create legacy table");
    sqlx::query("INSERT INTO courses (title, legacy) VALUES ('Old Course', 'kept')")
        .execute(&mut conn)
        .await
        .expect("Failed to insert legacy row");
    db::release(conn).await;

    let report = setup_database(&path).await;

    // Every insert names columns the old table lacks, so each row fails on
    // its own and the run still completes.
    assert_eq!(report.schema, Some(SchemaStatus::AlreadyExists));
    assert_eq!(
        report.seed,
        Some(SeedReport {
            inserted: 0,
            skipped: 0,
            failed: 72,
        })
    );

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    let sql = "SELECT name FROM pragma_table_info('courses')";
    let columns: Vec<String> = sqlx::query_scalar(sql)
        .fetch_all(&mut conn)
        .await
        .expect("Failed to read columns");
    let sql = "SELECT legacy FROM courses WHERE title = 'Old Course'";
    let legacy: String = sqlx::query_scalar(sql)
        .fetch_one(&mut conn)
        .await
        .expect("Failed to read legacy row");
    db::release(conn).await;

    assert_eq!(columns, vec!["id", "title", "legacy"]);
    assert_eq!(legacy, "kept");
}

#[tokio::test]
async fn test_missing_directory_is_created() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("deeper").join("courses.db");

    let report = setup_database(&path).await;

    assert!(path.parent().is_some_and(|p| p.is_dir()));
    assert!(path.is_file());
    assert_eq!(report.schema, Some(SchemaStatus::Created));
    assert_eq!(report.seed.map(|s| s.inserted), Some(72));
}

#[tokio::test]
async fn test_unusable_directory_is_reported_not_raised() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("Failed to write file");
    let path = blocker.join("sub").join("courses.db");

    let err = match db::connect(&path).await {
        Ok(_) => panic!("connect should fail when the parent is a file"),
        Err(e) => e,
    };
    assert_eq!(err.kind(), ErrorKind::Connection);

    let report = setup_database(&path).await;
    assert_eq!(report.schema, None);
    assert_eq!(report.seed, None);
}

#[tokio::test]
async fn test_insert_if_absent_reports_write() {
    let (_dir, path) = temp_db();
    let mut conn = db::connect(&path).await.expect("Failed to connect");
    let status = services::ensure_schema(&mut conn)
        .await
        .expect("Failed to ensure schema");
    assert_eq!(status, SchemaStatus::Created);

    let course = CATALOG[0];
    let first = repository::insert_course_if_absent(&mut conn, &course)
        .await
        .expect("Failed to insert course");
    let second = repository::insert_course_if_absent(&mut conn, &course)
        .await
        .expect("Failed to insert course");
    let count = repository::count_by_title(&mut conn, course.title)
        .await
        .expect("Failed to count title");
    db::release(conn).await;

    assert!(first);
    assert!(!second);
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_failed_row_does_not_stop_later_rows() {
    let (_dir, path) = temp_db();
    services::initialize_db(&path)
        .await
        .expect("Failed to initialize schema");

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    sqlx::query(
        r#"
        CREATE TRIGGER reject_blocked BEFORE INSERT ON courses
        WHEN NEW.title = 'Blocked Course'
        BEGIN
            SELECT RAISE(ABORT, 'blocked');
        END
        "#,
    )
    .execute(&mut conn)
    .await
    .expect("Failed to create trigger");
    db::release(conn).await;

    let rows = [
        NewCourse {
            title: "Blocked Course",
            video_url: "https://video.example/blocked",
            thumbnail_url: None,
            path: "DSA",
            description: None,
        },
        NewCourse {
            title: "Allowed Course",
            video_url: "https://video.example/allowed",
            thumbnail_url: None,
            path: "DSA",
            description: None,
        },
    ];

    let report = services::setup_database_with(&path, &rows).await;

    assert_eq!(report.schema, Some(SchemaStatus::AlreadyExists));
    assert_eq!(
        report.seed,
        Some(SeedReport {
            inserted: 1,
            skipped: 0,
            failed: 1,
        })
    );

    let mut conn = db::connect(&path).await.expect("Failed to connect");
    let blocked = repository::count_by_title(&mut conn, "Blocked Course")
        .await
        .expect("Failed to count title");
    let allowed = repository::count_by_title(&mut conn, "Allowed Course")
        .await
        .expect("Failed to count title");
    db::release(conn).await;

    assert_eq!(blocked, 0);
    assert_eq!(allowed, 1);
}
