//! Resume analyzer: PDF resume text extraction and lexical comparison against a
//! job description, served over HTTP.

pub mod analysis;
pub mod analyze;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;
