//! Display formatting for guidance results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! operation results are wrapped in the types from [`results`] so the CLI and
//! the MCP server print identical markdown.
//!
//! ```rust
//! use exitous_core::display::Companies;
//!
//! assert_eq!(Companies(vec![]).to_string(), "No companies found.\n");
//! ```

pub mod models;
pub mod results;

pub use results::{
    Companies, ContentStatus, GuidanceReport, IsActive, QuestionList, ValidationReport,
};
