//! # Magnum Container Commands
//!
//! File: cli/src/commands/container/mod.rs
//!
//! ## Overview
//!
//! Containers are the one resource kind with more than the four canonical
//! operations. `container-list` and `container-delete` use the shared handlers;
//! the rest live here:
//!
//! - `create`: `container-create`, body from `--json <file>` or stdin
//! - `show`: `container-show`, with an optional raw `--json` mode
//! - `actions`: `container-start|stop|reboot|pause|unpause|logs|execute`
//!

/// Implements `magnum container-create`.
pub mod create;
/// Implements the container lifecycle actions, `logs`, and `execute`.
pub mod actions;
/// Implements `magnum container-show`.
pub mod show;
