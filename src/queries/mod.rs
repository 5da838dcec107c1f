pub mod journal;
pub mod mood;
pub mod quiz_results;
pub mod users;
