pub mod auth;
pub mod health;
pub mod journal;
pub mod mood;
pub mod quiz;
pub mod report;
