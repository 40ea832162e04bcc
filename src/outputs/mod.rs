//! Output generation for search results.
//!
//! # Submodules
//!
//! - [`console`]: the numbered headline listing written to stdout
//! - [`json`]: an optional JSON report file for other tools to consume

pub mod console;
pub mod json;
