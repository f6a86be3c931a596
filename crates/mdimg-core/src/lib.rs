//! Localize remote images referenced by Markdown posts.
//!
//! Finds `![label](http...)` embeds, stores each image under a per-run
//! directory of a static-site project, and rewrites the post to point at the
//! local copies.

pub mod config;
pub mod document;
pub mod fetch;
pub mod logging;
pub mod processor;
pub mod project_root;
pub mod storage;
pub mod url_model;

pub use processor::{AssetLayout, DocumentProcessor, ProcessError, ProcessEvent, RunReport};
