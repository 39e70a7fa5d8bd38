//! # Magnum Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the command
//! handlers and the API gateway build on.
//!
//! ## Architecture
//!
//! - `config`: Loading, merging, and validating connection settings
//! - `error`: Error types and the application `Result` alias
//! - `resource`: The opaque resource record and the per-kind presentation table
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{MagnumError, Result}; // For error handling
//! use crate::core::resource::{Resource, ResourceKind}; // For resource records
//! ```
//!
pub mod config;
pub mod error;
pub mod resource;
