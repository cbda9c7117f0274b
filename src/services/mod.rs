pub mod setup_service;

pub use setup_service::{
    SchemaStatus, SeedReport, SetupReport, ensure_schema, initialize_db, insert_seed_data, seed,
    setup_database, setup_database_with,
};
