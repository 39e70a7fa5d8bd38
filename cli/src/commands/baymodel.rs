//! # Magnum Bay Model Commands
//!
//! File: cli/src/commands/baymodel.rs
//!
//! ## Overview
//!
//! Flags for `magnum baymodel-create`. A bay model is the reusable template of
//! provisioning parameters a bay is created from. None of the identifiers are
//! checked locally.
//!
//! ```bash
//! magnum baymodel-create --name k8s-model --image_id fedora-atomic \
//!     --keypair_id default --external_network_id public --flavor_id m1.small
//! ```
//!
use crate::commands::shared::set_optional;
use crate::core::resource::Attributes;
use clap::Parser;

/// # Bay Model Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the bay model to create.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// The name or UUID of the base image to customize for the bay.
    #[arg(long = "image_id", value_name = "IMAGE_ID")]
    image_id: Option<String>,

    /// The name or UUID of the SSH keypair to load into the bay nodes.
    #[arg(long = "keypair_id", value_name = "KEYPAIR_ID")]
    keypair_id: Option<String>,

    /// The external network ID to connect to this bay model.
    #[arg(long = "external_network_id", value_name = "EXTERNAL_NETWORK_ID")]
    external_network_id: Option<String>,

    /// The DNS nameserver to use for this bay.
    #[arg(long = "dns_nameserver", value_name = "DNS_NAMESERVER")]
    dns_nameserver: Option<String>,

    /// The flavor ID to use when launching the bay.
    #[arg(long = "flavor_id", value_name = "FLAVOR_ID")]
    flavor_id: Option<String>,
}

impl CreateArgs {
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = Attributes::new();
        set_optional(&mut attributes, "name", self.name);
        set_optional(&mut attributes, "flavor_id", self.flavor_id);
        set_optional(&mut attributes, "image_id", self.image_id);
        set_optional(&mut attributes, "keypair_id", self.keypair_id);
        set_optional(&mut attributes, "external_network_id", self.external_network_id);
        set_optional(&mut attributes, "dns_nameserver", self.dns_nameserver);
        attributes
    }
}
