//! # Magnum Node Commands
//!
//! File: cli/src/commands/node.rs
//!
//! Flags for `magnum node-create`.
//!
use crate::commands::shared::set_optional;
use crate::core::resource::Attributes;
use clap::Parser;

/// # Node Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Type of node to create (virt or bare).
    #[arg(long = "type", value_name = "TYPE")]
    node_type: Option<String>,

    /// The name or UUID of the base image to use for the node.
    #[arg(long = "image_id", value_name = "IMAGE_ID")]
    image_id: Option<String>,
}

impl CreateArgs {
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "type", self.node_type);
        set_optional(&mut attributes, "image_id", self.image_id);
        attributes
    }
}
