//! # ideas-core - Core Domain Types
//!
//! Foundation crate for Startup Ideas. Provides the idea record type, the
//! fallback idea list, payload parsing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Ideas (`idea`)
//! - [`IdeaRecord`] - A title plus optional summary
//! - [`fallback_ideas()`] - Fixed list used when the idea source fails
//! - [`parse_idea_list()`] - Validate and decode an idea-list JSON payload
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ideas_core::prelude::*;
//! ```

pub mod error;
pub mod idea;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use idea::{fallback_ideas, parse_idea_list, to_pretty_json, IdeaRecord, UNTITLED_IDEA};
