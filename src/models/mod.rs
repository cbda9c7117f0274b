pub mod course;

pub use course::{Course, NewCourse, PLACEHOLDER_THUMBNAIL_URL};
