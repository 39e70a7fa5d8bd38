//! # Magnum Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers for commands that read local input files before calling
//! the API (`pod-create --pod-file`, `container-create --json`).
//!

/// Contains the file reads used by create commands (`read_file_to_string`, `read_optional_file`).
pub mod io;
