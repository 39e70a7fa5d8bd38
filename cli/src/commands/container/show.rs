//! # Magnum Container Show Handler
//!
//! File: cli/src/commands/container/show.rs
//!
//! Implements `magnum container-show`, which either renders the property/value
//! table like every other `show` command or, with `--json`, prints the raw
//! record as a single line of JSON.
//!
use crate::{
    commands::shared,
    common::gateway::Gateway,
    core::{error::Result, resource::ResourceKind},
};
use clap::Parser;
use std::io::Write;
use tracing::info;

/// # Container Show Arguments (`ShowArgs`)
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// ID of the container to show.
    #[arg(long, value_name = "CONTAINER_ID")]
    id: String,

    /// Print JSON representation of the container.
    #[arg(long)]
    json: bool,
}

pub async fn handle_show<G: Gateway, W: Write>(gateway: &G, args: ShowArgs, out: &mut W) -> Result<()> {
    if !args.json {
        return shared::handle_show(gateway, ResourceKind::Container, &args.id, out).await;
    }
    info!("Showing container '{}' as JSON", args.id);
    let container = gateway.get(ResourceKind::Container, &args.id).await?;
    serde_json::to_writer(&mut *out, container.info())?;
    writeln!(out)?;
    Ok(())
}
