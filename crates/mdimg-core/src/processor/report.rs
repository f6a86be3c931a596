//! Run outcome, progress events and run-level errors.

use crate::document::Substitution;
use crate::fetch::FetchError;
use std::io;
use std::path::{Path, PathBuf};

/// Summary of one processed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Run identifier; `None` when the document had no remote images.
    pub run_id: Option<String>,
    /// Run directory images were stored under.
    pub destination: Option<PathBuf>,
    /// Remote image references found.
    pub found: usize,
    pub downloaded: usize,
    pub failed: usize,
    /// Always 0: every reference gets exactly one fetch attempt.
    pub skipped: usize,
    /// Rewrites applied, in document order.
    pub substitutions: Vec<Substitution>,
    /// True if the document was written back.
    pub rewritten: bool,
}

/// Progress notifications emitted while a document is processed.
#[derive(Debug)]
pub enum ProcessEvent<'a> {
    Found {
        count: usize,
    },
    Destination {
        run_id: &'a str,
        dir: &'a Path,
    },
    Attempt {
        index: usize,
        total: usize,
        url: &'a str,
    },
    Saved {
        index: usize,
        file_name: &'a str,
        public_path: &'a str,
    },
    Failed {
        index: usize,
        url: &'a str,
        error: &'a FetchError,
    },
    Rewritten {
        path: &'a Path,
        substitutions: usize,
    },
}

/// Failures that stop a run. Per-image failures are counted, not raised.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a Markdown file (expected .md): {}", .0.display())]
    NotMarkdown(PathBuf),
    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("create run directory {}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write back {}", path.display())]
    WriteBack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
