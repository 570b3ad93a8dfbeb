pub mod database;
pub mod models;
pub mod queries;

pub use database::{open_database, with_db_mut, DEFAULT_DB_PATH};
pub use models::*;
pub use queries::*;
