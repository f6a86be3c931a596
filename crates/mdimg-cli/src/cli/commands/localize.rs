//! Localize command: fetch a post's remote images and rewrite the post.

use anyhow::Result;
use mdimg_core::config::MdimgConfig;
use mdimg_core::fetch::{CurlFetcher, CurlOptions, FetchError};
use mdimg_core::project_root::{executable_dir, ProjectRootResolver};
use mdimg_core::{AssetLayout, DocumentProcessor, ProcessEvent, RunReport};
use std::path::{Path, PathBuf};

/// URLs longer than this are shortened in progress lines.
const URL_DISPLAY_CHARS: usize = 60;

/// Process `path` and print progress plus a summary.
///
/// Individual download failures do not make this return an error.
pub fn run_localize(cfg: &MdimgConfig, path: &Path, project_root: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let doc_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.clone());
    let exe_dir = executable_dir();
    let mut start_dirs: Vec<&Path> = vec![doc_dir.as_path()];
    if let Some(dir) = exe_dir.as_deref() {
        start_dirs.push(dir);
    }

    let root = ProjectRootResolver::from_config(cfg)
        .with_override(project_root)
        .resolve(&start_dirs, &cwd);
    tracing::info!(source = ?root.source, "project root {}", root.path.display());

    let layout = AssetLayout::for_project(&root.path, cfg);
    let processor = DocumentProcessor::new(
        CurlFetcher::new(CurlOptions::from_config(cfg)),
        layout,
    );

    println!("Processing {}", path.display());
    let report = processor.process_with(path, &mut print_event)?;
    print_summary(&report);
    Ok(())
}

fn print_event(event: &ProcessEvent<'_>) {
    match event {
        ProcessEvent::Found { count } => match *count {
            0 => println!("No remote images found."),
            n => println!("Found {} remote image(s).", n),
        },
        ProcessEvent::Destination { dir, .. } => println!("Saving to {}", dir.display()),
        ProcessEvent::Attempt { index, total, url } => {
            println!("[{}/{}] Downloading {}", index, total, truncate_url(url))
        }
        ProcessEvent::Saved { file_name, .. } => println!("      saved as {}", file_name),
        ProcessEvent::Failed { error, .. } => println!("      {}", failure_line(error)),
        ProcessEvent::Rewritten { path, substitutions } => println!(
            "Updated {} ({} reference(s) rewritten)",
            path.display(),
            substitutions
        ),
    }
}

fn print_summary(report: &RunReport) {
    if report.found == 0 {
        println!("Nothing to do.");
        return;
    }
    println!(
        "Done: {} downloaded, {} failed",
        report.downloaded, report.failed
    );
}

/// Tells network-side failures apart from local disk problems.
fn failure_line(error: &FetchError) -> String {
    if error.is_network() {
        format!("download failed: {}", error)
    } else {
        format!("could not save: {}", error)
    }
}

/// Shortens `url` to at most `URL_DISPLAY_CHARS` characters, ending with `...`.
fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_DISPLAY_CHARS {
        return url.to_string();
    }
    let head: String = url.chars().take(URL_DISPLAY_CHARS - 3).collect();
    format!("{}...", head)
}
