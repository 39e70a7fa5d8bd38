//! # Magnum UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output helpers shared by the command handlers. Everything writes to
//! a caller-supplied `std::io::Write` so handlers can be tested against a buffer.
//!
//! - **`tables`**: Bordered tables for list and show/create output.
//!
//! ```rust
//! use crate::common::ui::tables;
//!
//! tables::print_list(&mut out, &bays, &["uuid", "name", "node_count"])?;
//! tables::print_dict(&mut out, bay.info())?;
//! ```
//!

/// Table rendering for resource lists and single records.
pub mod tables;
