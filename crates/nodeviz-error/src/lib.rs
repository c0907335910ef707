//! # nodeviz-error
//!
//! Unified error handling for nodeviz.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., RecordInvalid, NodeNotFound)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use nodeviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::RecordInvalid, "expected 4 fields")
//!         .with_operation("record::parse_node_records")
//!         .with_context("file", "nodes.txt")
//!         .with_context("line", "7"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible operations return `Result<T, nodeviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using nodeviz Error
pub type Result<T> = std::result::Result<T, Error>;
