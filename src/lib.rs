pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;

pub use config::Config;
pub use error::{CatalogError, ErrorKind};
pub use services::{SchemaStatus, SeedReport, SetupReport, setup_database};
