//! # classver-core
//!
//! A library for reporting the class file format versions of compiled Java
//! bytecode.
//!
//! This crate provides the core functionality for:
//! - Parsing the fixed 8-byte class file header (magic plus version fields)
//! - Enumerating `.class` candidates inside a jar archive or below a
//!   directory tree
//! - Aggregating per-file results into a run summary with the highest and
//!   lowest major version seen
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`scan`]: Input-mode detection, candidate enumeration, and header parsing
//! - [`report`]: Per-item result aggregation and summary formatting
//! - [`version`]: The major-version to Java-release-name table
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use classver_core::scan_path;
//!
//! // Check every .class entry of an archive
//! let report = scan_path("path/to/lib.jar")?;
//!
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! println!("{}", report.summary("path/to/lib.jar"));
//! # Ok::<(), classver_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod report;
pub mod scan;
pub mod version;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use report::{ParseResult, Report};
pub use scan::{parse_header, scan_path, ClassHeader, HeaderOutcome, InputKind, CLASS_MAGIC};
pub use version::version_name;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
