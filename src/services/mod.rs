pub mod analysis;
pub mod journal;
pub mod jwt;
pub mod mood;
pub mod quiz;
pub mod report;
pub mod users;
