use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser identity sent with every image request; some hosts reject obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Global configuration loaded from `~/.config/mdimg/config.toml`.
///
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MdimgConfig {
    /// Total time allowed for one image request, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// `User-Agent` header value for image requests.
    pub user_agent: String,
    /// Maximum redirects followed per request.
    pub max_redirects: u32,
    /// Storage root for downloaded images, relative to the project root.
    pub static_dir: PathBuf,
    /// Site-root path prefix written into rewritten references.
    pub public_prefix: String,
    /// Files whose presence marks a static-site project root.
    pub root_markers: Vec<String>,
    /// How many ancestors above a start directory are searched for a marker.
    pub max_root_search_levels: usize,
    /// Explicit project root; skips marker discovery when set.
    pub project_root: Option<PathBuf>,
}

impl Default for MdimgConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
            static_dir: PathBuf::from("static/images/posts"),
            public_prefix: "/images/posts".to_string(),
            root_markers: vec![
                "hugo.toml".to_string(),
                "hugo.yaml".to_string(),
                "hugo.json".to_string(),
                "config.toml".to_string(),
            ],
            max_root_search_levels: 4,
            project_root: None,
        }
    }
}

/// Location of the user config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdimg")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults when no file exists.
///
/// Never writes to disk.
pub fn load_or_default() -> Result<MdimgConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(MdimgConfig::default()),
    }
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<MdimgConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: MdimgConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
