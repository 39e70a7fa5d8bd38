//! # Shared Resource Handlers
//!
//! File: cli/src/commands/shared.rs
//!
//! ## Overview
//!
//! The four canonical operations are the same for every resource kind; only the
//! per-kind presentation table (`ResourceKind::spec`) differs. Each handler makes
//! exactly one gateway call and renders the result:
//!
//! | Handler | Gateway call | Output |
//! |---|---|---|
//! | `handle_list` | `list(kind)` | table of the kind's list columns |
//! | `handle_show` | `get(kind, id)` | property/value table |
//! | `handle_create` | `create(kind, attributes)` | property/value table |
//! | `handle_delete` | `delete(kind, id)` | nothing |
//!
//! Gateway errors are returned untouched so the server's message reaches the user.
//!
use crate::{
    common::{gateway::Gateway, ui::tables},
    core::{
        error::Result,
        resource::{Attributes, Resource, ResourceKind},
    },
};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, info};

pub async fn handle_list<G: Gateway, W: Write>(
    gateway: &G,
    kind: ResourceKind,
    out: &mut W,
) -> Result<()> {
    info!("Listing {} resources", kind);
    let resources = gateway.list(kind).await?;
    debug!("Received {} {} record(s)", resources.len(), kind);
    tables::print_list(out, &resources, kind.spec().list_columns)?;
    Ok(())
}

pub async fn handle_show<G: Gateway, W: Write>(
    gateway: &G,
    kind: ResourceKind,
    id: &str,
    out: &mut W,
) -> Result<()> {
    info!("Showing {} '{}'", kind, id);
    let resource = gateway.get(kind, id).await?;
    print_resource(kind, resource, out)
}

pub async fn handle_create<G: Gateway, W: Write>(
    gateway: &G,
    kind: ResourceKind,
    attributes: Attributes,
    out: &mut W,
) -> Result<()> {
    info!("Creating {} with attributes: {:?}", kind, attributes.keys().collect::<Vec<_>>());
    let resource = gateway.create(kind, attributes).await?;
    print_resource(kind, resource, out)
}

pub async fn handle_delete<G: Gateway>(gateway: &G, kind: ResourceKind, id: &str) -> Result<()> {
    info!("Deleting {} '{}'", kind, id);
    gateway.delete(kind, id).await
}

/// Renders one record, dropping `links` when the kind's table says so.
pub fn print_resource<W: Write>(kind: ResourceKind, resource: Resource, out: &mut W) -> Result<()> {
    let mut info = resource.into_info();
    if kind.spec().strip_links {
        info.remove("links");
    }
    tables::print_dict(out, &info)?;
    Ok(())
}

/// Inserts `value` under `key` only when the flag was given.
pub fn set_optional<V: Into<Value>>(attributes: &mut Attributes, key: &str, value: Option<V>) {
    if let Some(value) = value {
        attributes.insert(key.to_string(), value.into());
    }
}
