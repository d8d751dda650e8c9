//! Career advisor core: matches self-reported skills against a catalog of job
//! roles, ranks recommendations, analyzes skill gaps, builds a 12-week
//! roadmap, and scores mock interview answers.
//!
//! `Advisor` is the entry point; `cli::Menu` is the interactive front end.

pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interview;
pub mod matching;
pub mod models;
pub mod profile_store;
pub mod roadmap;

pub use advisor::Advisor;
pub use errors::AdvisorError;
