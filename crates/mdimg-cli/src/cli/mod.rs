//! CLI for mdimg.

mod commands;

use anyhow::Result;
use clap::Parser;
use mdimg_core::config;
use std::path::PathBuf;

use commands::run_localize;

/// Download remote images referenced by a Markdown post and point the post at local copies.
#[derive(Debug, Parser)]
#[command(name = "mdimg")]
#[command(about = "Localize remote images in a Markdown post", long_about = None)]
pub struct Cli {
    /// Markdown file to process (`.md`).
    pub path: PathBuf,

    /// Static-site project root (skips marker-file discovery).
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Per-image request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Config file to use instead of `~/.config/mdimg/config.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    fn run(self) -> Result<()> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        if let Some(secs) = self.timeout {
            cfg.timeout_secs = secs;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        run_localize(&cfg, &self.path, self.project_root)
    }
}
