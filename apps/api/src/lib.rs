pub mod analysis;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod numeric;
pub mod readiness;
pub mod routes;
pub mod scoring;
pub mod state;
