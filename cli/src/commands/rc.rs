//! # Magnum Replication Controller Commands
//!
//! File: cli/src/commands/rc.rs
//!
//! Flags for `magnum rc-create`. The definition is referenced by name/URL and
//! fetched by the server.
//!
use crate::commands::shared::set_optional;
use crate::core::resource::Attributes;
use clap::Parser;

/// # Replication Controller Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name/URL of the replication controller file to use for creating replication controllers.
    #[arg(long = "rc-file", value_name = "RC_FILE")]
    rc_file: Option<String>,
}

impl CreateArgs {
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "rc_definition_url", self.rc_file);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_rc_file_is_sent_as_definition_url() {
        let args =
            CreateArgs::try_parse_from(["rc-create", "--rc-file", "http://example.org/rc.yaml"])
                .unwrap();
        assert_eq!(
            Value::Object(args.into_attributes()),
            json!({"rc_definition_url": "http://example.org/rc.yaml"})
        );
    }
}
