pub mod database;

pub use database::TestDb;
