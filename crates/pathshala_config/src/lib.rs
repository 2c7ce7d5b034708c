//! Layered configuration for Pathshala.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`pathshala.toml` shipped with this crate)
//! 2. `~/.config/pathshala/pathshala.toml`
//! 3. `./pathshala.toml`
//! 4. `PATHSHALA__SECTION__KEY` environment variables

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{ModelConfig, PathshalaConfig, SearchConfig, SearchMode, StorageConfig};
