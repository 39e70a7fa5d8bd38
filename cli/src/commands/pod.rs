//! # Magnum Pod Commands
//!
//! File: cli/src/commands/pod.rs
//!
//! ## Overview
//!
//! Flags for `magnum pod-create`. A pod can be described by a URL the server
//! fetches (`--pod-url`), by the contents of a local file (`--pod-file`), or both.
//! Both are passed through when given and the server decides precedence.
//!
//! `--pod-file` is optional input: a path that is not a regular file is skipped
//! and `pod_data` is left out of the request. `--bay_id` is always sent.
//!
//! ```bash
//! magnum pod-create --bay_id 0b5e0fd7-... --pod-file ./redis-pod.yaml
//! magnum pod-create --bay_id 0b5e0fd7-... --pod-url https://example.org/redis-pod.yaml
//! ```
//!
use crate::{
    commands::shared::set_optional,
    common::fs::io,
    core::{error::Result, resource::Attributes},
};
use clap::Parser;
use std::path::PathBuf;

/// # Pod Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name/URL of the pod file to use for creating pods.
    #[arg(long = "pod-url", value_name = "POD_URL")]
    pod_url: Option<String>,

    /// File path of the pod file to use for creating pods.
    #[arg(long = "pod-file", value_name = "POD_FILE")]
    pod_file: Option<PathBuf>,

    /// The bay ID.
    #[arg(long = "bay_id", value_name = "BAY_ID", required = true)]
    bay_id: String,
}

impl CreateArgs {
    /// Builds the create body, reading `--pod-file` if it names a regular file.
    pub fn into_attributes(self) -> Result<Attributes> {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "pod_definition_url", self.pod_url);
        attributes.insert("bay_uuid".to_string(), self.bay_id.into());
        if let Some(path) = &self.pod_file {
            set_optional(&mut attributes, "pod_data", io::read_optional_file(path)?);
        }
        Ok(attributes)
    }
}
