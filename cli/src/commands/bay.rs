//! # Magnum Bay Commands
//!
//! File: cli/src/commands/bay.rs
//!
//! ## Overview
//!
//! Flags for `magnum bay-create`. The `list`, `show`, and `delete` commands use
//! the shared handlers with `ResourceKind::Bay`.
//!
//! ```bash
//! magnum bay-create --name k8s --baymodel_id 5f3c... --node_count 3
//! magnum bay-show --id 0b5e0fd7-...
//! ```
//!
//! Values are passed through verbatim; the server validates them.
//!
use crate::commands::shared::set_optional;
use crate::core::resource::Attributes;
use clap::Parser;
use serde_json::Value;

/// # Bay Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the bay to create.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// The bay model ID.
    #[arg(long = "baymodel_id", value_name = "BAYMODEL_ID")]
    baymodel_id: Option<String>,

    /// The bay node count.
    #[arg(long = "node_count", value_name = "NODE_COUNT", allow_hyphen_values = true)]
    node_count: Option<String>,
}

impl CreateArgs {
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "name", self.name);
        set_optional(&mut attributes, "baymodel_id", self.baymodel_id);
        set_optional(&mut attributes, "node_count", self.node_count.map(node_count_value));
        attributes
    }
}

/// Integers are sent as JSON numbers; anything else is sent as typed.
fn node_count_value(raw: String) -> Value {
    match raw.parse::<i64>() {
        Ok(count) => Value::from(count),
        Err(_) => Value::String(raw),
    }
}
