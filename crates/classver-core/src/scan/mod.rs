//! Candidate enumeration and scan driving.
//!
//! This module selects the input mode for a path, enumerates candidate
//! class file streams one at a time, feeds each through the header parser,
//! and folds the outcomes into a [`Report`].
//!
//! ## Input modes
//!
//! - **Jar mode** — the path ends in `.jar` (case-sensitive): the file is
//!   opened as a zip archive and every entry named `*.class` is checked.
//!   A missing or corrupt archive aborts the whole run.
//! - **Tree mode** — any other path: the path is walked recursively and
//!   every regular file named `*.class` is checked. Walking a path that is
//!   itself a single file yields that one file.
//!
//! Per-item failures (wrong magic, an unreadable file or entry) are
//! recorded in the report and never abort the scan. At most one stream is
//! open at a time; each is dropped before the next is requested.

mod header;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::report::{ParseResult, Report};

pub use header::{parse_header, ClassHeader, HeaderOutcome, CLASS_MAGIC};

/// File name suffix identifying class files, on disk and in jar entries
pub const CLASS_SUFFIX: &str = ".class";

/// Input path suffix selecting jar mode
pub const JAR_SUFFIX: &str = ".jar";

/// Input shape selected from the path argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A zip-format archive of class file entries
    Jar,
    /// A directory tree (or a single file) on disk
    Tree,
}

impl InputKind {
    /// Select the input mode for a path.
    ///
    /// The `.jar` suffix is matched case-sensitively against the path
    /// string; everything else is walked as a filesystem tree.
    pub fn detect(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(JAR_SUFFIX) {
            InputKind::Jar
        } else {
            InputKind::Tree
        }
    }
}

/// Check every class file reachable from `path` and aggregate the results.
///
/// Dispatches on [`InputKind`]. Failing to open or parse a jar is fatal;
/// everything else is recorded per item and the scan continues.
pub fn scan_path(path: impl AsRef<Path>) -> Result<Report> {
    let path = path.as_ref();
    let mut report = Report::new();

    match InputKind::detect(path) {
        InputKind::Jar => scan_jar(path, &mut report)?,
        InputKind::Tree => scan_tree(path, &mut report),
    }

    debug!(
        "Scan of {} complete: {} class files checked",
        path.display(),
        report.checked()
    );
    Ok(report)
}

/// Feed one stream through the header parser and record the outcome.
fn check_stream<R: Read>(label: String, reader: R, report: &mut Report) {
    trace!("Checking {}", label);
    let result = match parse_header(reader) {
        Ok(HeaderOutcome::Valid(header)) => ParseResult::Valid { label, header },
        Ok(HeaderOutcome::BadMagic) => ParseResult::Invalid { label },
        Err(e) => ParseResult::ReadError {
            label,
            message: e.to_string(),
        },
    };
    report.record(result);
}

/// Enumerate the `.class` entries of a jar archive.
///
/// Directory entries and entries without the `.class` suffix are skipped.
/// A single unreadable entry is recorded and skipped; failing to open the
/// archive itself propagates as a fatal error.
fn scan_jar(path: &Path, report: &mut Report) -> Result<()> {
    debug!("Scanning archive {}", path.display());
    let file = File::open(path).map_err(|e| Error::archive_open(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::archive_read(path, e))?;

    for index in 0..archive.len() {
        let entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                report.record(ParseResult::ReadError {
                    label: format!("entry #{}", index),
                    message: e.to_string(),
                });
                continue;
            }
        };
        if entry.is_dir() || !entry.name().ends_with(CLASS_SUFFIX) {
            continue;
        }
        let label = entry.name().to_string();
        check_stream(label, entry, report);
    }

    Ok(())
}

/// Walk a directory tree (or a single file) for `.class` files.
///
/// Traversal errors are logged and skipped; a matched file that cannot be
/// opened is recorded as a per-item failure and the walk continues.
fn scan_tree(path: &Path, report: &mut Report) {
    debug!("Scanning tree {}", path.display());
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(CLASS_SUFFIX) {
            continue;
        }

        let label = entry.path().display().to_string();
        match File::open(entry.path()) {
            Ok(file) => check_stream(label, file, report),
            Err(e) => report.record(ParseResult::ReadError {
                label,
                message: e.to_string(),
            }),
        }
    }
}
