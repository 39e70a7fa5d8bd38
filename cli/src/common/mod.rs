//! # Magnum Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared modules used by the command handlers, kept apart from command-specific
//! logic (`commands::`) and core infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`gateway`**: The `Gateway` trait and its HTTP implementation; the only code that touches the network.
//! - **`fs`**: Local file reads for create commands.
//! - **`ui`**: Table rendering for command output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs, gateway::Gateway, ui::tables};
//!
//! # async fn run_example<G: Gateway>(gateway: &G, out: &mut impl std::io::Write) -> Result<()> {
//! let pods = gateway.list(ResourceKind::Pod).await?;
//! tables::print_list(out, &pods, ResourceKind::Pod.spec().list_columns)?;
//! # Ok(())
//! # }
//! ```
//!

/// Filesystem reads for command inputs.
pub mod fs;
/// Remote API access (`Gateway` trait, `HttpGateway`).
pub mod gateway;
/// Terminal output (tables).
pub mod ui;
