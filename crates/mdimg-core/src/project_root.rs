//! Project root discovery for a static-site tree.
//!
//! Strategies, first hit wins: explicit override, marker-file search upward
//! from each start directory, then the current working directory.

use crate::config::MdimgConfig;
use std::path::{Path, PathBuf};

/// How a project root was found (useful in logs and reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Override,
    Marker,
    CurrentDir,
}

/// Resolved project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub path: PathBuf,
    pub source: RootSource,
}

#[derive(Debug, Clone)]
pub struct ProjectRootResolver {
    explicit: Option<PathBuf>,
    markers: Vec<String>,
    max_levels: usize,
}

impl ProjectRootResolver {
    pub fn new(markers: Vec<String>, max_levels: usize) -> Self {
        Self {
            explicit: None,
            markers,
            max_levels,
        }
    }

    pub fn from_config(cfg: &MdimgConfig) -> Self {
        Self {
            explicit: cfg.project_root.clone(),
            markers: cfg.root_markers.clone(),
            max_levels: cfg.max_root_search_levels,
        }
    }

    /// Replaces the explicit override; `None` keeps the current one.
    pub fn with_override(mut self, root: Option<PathBuf>) -> Self {
        if root.is_some() {
            self.explicit = root;
        }
        self
    }

    /// Resolves the project root. Never fails: falls back to `cwd`.
    pub fn resolve(&self, start_dirs: &[&Path], cwd: &Path) -> ProjectRoot {
        if let Some(root) = &self.explicit {
            return ProjectRoot {
                path: root.clone(),
                source: RootSource::Override,
            };
        }
        for start in start_dirs {
            if let Some(path) = self.find_marker_upward(start) {
                return ProjectRoot {
                    path,
                    source: RootSource::Marker,
                };
            }
        }
        ProjectRoot {
            path: cwd.to_path_buf(),
            source: RootSource::CurrentDir,
        }
    }

    /// Checks `start` and up to `max_levels` ancestors for a marker file.
    fn find_marker_upward(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .take(self.max_levels + 1)
            .find(|dir| self.markers.iter().any(|m| dir.join(m).is_file()))
            .map(Path::to_path_buf)
    }
}

/// Directory holding the running executable, if it can be determined.
pub fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
