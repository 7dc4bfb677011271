// pagestats: term statistics for web pages.
//
// This is the library root. The pipeline runs fetch -> text -> document ->
// corpus -> stats, and report/output present the result.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod fetch;
pub mod output;
pub mod report;
pub mod stats;
pub mod text;

pub use error::{AnalysisError, Result};
