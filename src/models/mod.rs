pub mod journal;
pub mod mood;
pub mod quiz;
pub mod users;
