//! # Magnum Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Local file reads used by commands that send file contents to the API. They
//! run before any network call, so a bad path never costs a request.
//!
//! - **`read_file_to_string`**: Reads a required input file; a missing or
//!   non-regular path is a `MagnumError::FileSystem`.
//! - **`read_optional_file`**: Reads an optional input file; a path that is not
//!   a regular file yields `None` and the caller omits the field.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let body = io::read_file_to_string(Path::new("container.json"))?;
//! if let Some(pod_data) = io::read_optional_file(Path::new("pod.yaml"))? {
//!     attributes.insert("pod_data".into(), pod_data.into());
//! }
//! ```
//!
use crate::core::error::{MagnumError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads the entire content of a file that must exist.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    if !path.is_file() {
        anyhow::bail!(MagnumError::FileSystem(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Reads `path` if it is a regular file; returns `None` otherwise.
///
/// A path that exists as a regular file but cannot be read is still an error.
pub fn read_optional_file(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        info!("Skipping {:?}: not a regular file", path);
        return Ok(None);
    }
    read_file_to_string(path).map(Some)
}
