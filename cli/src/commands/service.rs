//! # Magnum Service Commands
//!
//! File: cli/src/commands/service.rs
//!
//! Flags for `magnum service-create`.
//!
use crate::commands::shared::set_optional;
use crate::core::resource::Attributes;
use clap::Parser;

/// # Service Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name/URL of the service file to use for creating services.
    #[arg(long = "service-file", value_name = "SERVICE_FILE")]
    service_file: Option<String>,
}

impl CreateArgs {
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "service_definition_url", self.service_file);
        attributes
    }
}
