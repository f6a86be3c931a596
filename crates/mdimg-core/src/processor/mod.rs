//! Document processor: extract remote image references, store each image
//! locally, then rewrite the document in one atomic write.
//!
//! Images are fetched strictly one at a time in document order. A failed
//! image is counted and left pointing at its remote URL; only input
//! validation and run-directory creation abort a run. The document itself is
//! untouched until every fetch has been attempted.

mod layout;
mod report;

pub use layout::AssetLayout;
pub use report::{ProcessError, ProcessEvent, RunReport};

use crate::document::{
    apply_substitutions, extract_references, image_markdown, is_markdown_path, Substitution,
};
use crate::fetch::{fetch_and_store, Fetcher};
use crate::storage;
use crate::url_model::{asset_base_name, new_run_id};
use std::fs;
use std::path::Path;

pub struct DocumentProcessor<F> {
    fetcher: F,
    layout: AssetLayout,
}

impl<F: Fetcher> DocumentProcessor<F> {
    pub fn new(fetcher: F, layout: AssetLayout) -> Self {
        Self { fetcher, layout }
    }

    /// Processes `path` without progress reporting.
    pub fn process(&self, path: &Path) -> Result<RunReport, ProcessError> {
        self.process_with(path, &mut |_| {})
    }

    /// Processes `path`, passing progress events to `on_event`.
    pub fn process_with(
        &self,
        path: &Path,
        on_event: &mut dyn FnMut(&ProcessEvent<'_>),
    ) -> Result<RunReport, ProcessError> {
        let text = read_document(path)?;

        let references = extract_references(&text);
        let mut report = RunReport {
            found: references.len(),
            ..RunReport::default()
        };
        on_event(&ProcessEvent::Found {
            count: references.len(),
        });
        if references.is_empty() {
            tracing::info!("no remote images in {}", path.display());
            return Ok(report);
        }

        let run_id = new_run_id();
        let run_dir = self.layout.run_dir(&run_id);
        fs::create_dir_all(&run_dir).map_err(|source| ProcessError::CreateDestination {
            path: run_dir.clone(),
            source,
        })?;
        tracing::info!(
            run_id = %run_id,
            images = references.len(),
            "processing {} into {}",
            path.display(),
            run_dir.display()
        );
        on_event(&ProcessEvent::Destination {
            run_id: &run_id,
            dir: &run_dir,
        });

        let total = references.len();
        let mut substitutions: Vec<Substitution> = Vec::new();
        for (i, reference) in references.iter().enumerate() {
            let index = i + 1;
            let url = reference.url.as_str();
            on_event(&ProcessEvent::Attempt { index, total, url });
            let base_path = run_dir.join(asset_base_name(url, index));
            match fetch_and_store(&self.fetcher, url, &base_path) {
                Ok(stored) => {
                    let file_name = stored
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    let public_path = self.layout.public_path(&run_id, &file_name);
                    substitutions.push(Substitution {
                        original: reference.literal.clone(),
                        replacement: image_markdown(&reference.label, &public_path),
                    });
                    report.downloaded += 1;
                    tracing::info!(index, url, file = %file_name, "saved");
                    on_event(&ProcessEvent::Saved {
                        index,
                        file_name: &file_name,
                        public_path: &public_path,
                    });
                }
                Err(error) => {
                    report.failed += 1;
                    tracing::warn!(index, url, "fetch failed: {}", error);
                    on_event(&ProcessEvent::Failed {
                        index,
                        url,
                        error: &error,
                    });
                }
            }
        }

        if !substitutions.is_empty() {
            let rewritten = apply_substitutions(&text, &substitutions);
            write_back(path, &rewritten)?;
            report.rewritten = true;
            on_event(&ProcessEvent::Rewritten {
                path,
                substitutions: substitutions.len(),
            });
        }

        tracing::info!(
            run_id = %run_id,
            downloaded = report.downloaded,
            failed = report.failed,
            "run finished"
        );
        report.run_id = Some(run_id);
        report.destination = Some(run_dir);
        report.substitutions = substitutions;
        Ok(report)
    }
}

/// Replaces the document's content, following symlinks to the real file.
fn write_back(path: &Path, text: &str) -> Result<(), ProcessError> {
    let err = |source| ProcessError::WriteBack {
        path: path.to_path_buf(),
        source,
    };
    let target = fs::canonicalize(path).map_err(err)?;
    storage::write_atomic(&target, text.as_bytes()).map_err(err)
}

/// Validates the input path and reads the document.
fn read_document(path: &Path) -> Result<String, ProcessError> {
    if !path.exists() {
        return Err(ProcessError::NotFound(path.to_path_buf()));
    }
    if !is_markdown_path(path) {
        return Err(ProcessError::NotMarkdown(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })
}
