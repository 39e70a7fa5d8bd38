//! # Magnum Resource Model
//!
//! File: cli/src/core/resource.rs
//!
//! ## Overview
//!
//! Every object the API hands back (bays, bay models, nodes, pods, replication
//! controllers, services, containers) is an opaque, server-owned record. The
//! client keeps it as the flat attribute map the server returned and never
//! validates or mutates it beyond presentation.
//!
//! `ResourceKind` carries the per-kind table that the commands and the gateway
//! share: the API collection name, the list-view columns, whether `links` is
//! stripped before display, and the attributes accepted on creation.
//!
use crate::core::error::MagnumError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Flat field mapping of a resource, exactly as returned by the server.
pub type Attributes = Map<String, Value>;

/// The resource kinds exposed by the orchestration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Bay,
    BayModel,
    Node,
    Pod,
    Rc,
    Service,
    Container,
}

/// Static description of one resource kind.
#[derive(Debug)]
pub struct KindSpec {
    /// Name used as the command prefix (`bay` in `bay-list`).
    pub name: &'static str,
    /// API collection, both the URL segment and the key of the list response.
    pub collection: &'static str,
    /// Columns rendered by `<kind>-list`, in order.
    pub list_columns: &'static [&'static str],
    /// Remove the `links` field before rendering a single record.
    pub strip_links: bool,
    /// Keys accepted by `create`; anything else is rejected before sending.
    pub creation_attributes: &'static [&'static str],
}

const BAY: KindSpec = KindSpec {
    name: "bay",
    collection: "bays",
    list_columns: &["uuid", "name", "node_count"],
    strip_links: true,
    creation_attributes: &["name", "baymodel_id", "node_count"],
};

const BAY_MODEL: KindSpec = KindSpec {
    name: "baymodel",
    collection: "baymodels",
    list_columns: &["uuid", "name"],
    strip_links: true,
    creation_attributes: &[
        "name",
        "image_id",
        "flavor_id",
        "keypair_id",
        "external_network_id",
        "dns_nameserver",
    ],
};

const NODE: KindSpec = KindSpec {
    name: "node",
    collection: "nodes",
    list_columns: &["uuid", "type", "image_id"],
    strip_links: false,
    creation_attributes: &["type", "image_id"],
};

const POD: KindSpec = KindSpec {
    name: "pod",
    collection: "pods",
    list_columns: &["uuid", "name"],
    strip_links: false,
    creation_attributes: &["pod_definition_url", "pod_data", "bay_uuid"],
};

const RC: KindSpec = KindSpec {
    name: "rc",
    collection: "rcs",
    list_columns: &["uuid", "name"],
    strip_links: false,
    creation_attributes: &["rc_definition_url", "rc_data", "bay_uuid"],
};

const SERVICE: KindSpec = KindSpec {
    name: "service",
    collection: "services",
    list_columns: &["uuid", "name", "bay_uuid"],
    strip_links: false,
    creation_attributes: &["service_definition_url", "service_data", "bay_uuid"],
};

const CONTAINER: KindSpec = KindSpec {
    name: "container",
    collection: "containers",
    list_columns: &["uuid", "name", "desc"],
    strip_links: false,
    creation_attributes: &["name", "image_id", "command", "bay_uuid"],
};

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Bay,
        ResourceKind::BayModel,
        ResourceKind::Node,
        ResourceKind::Pod,
        ResourceKind::Rc,
        ResourceKind::Service,
        ResourceKind::Container,
    ];

    pub fn spec(self) -> &'static KindSpec {
        match self {
            ResourceKind::Bay => &BAY,
            ResourceKind::BayModel => &BAY_MODEL,
            ResourceKind::Node => &NODE,
            ResourceKind::Pod => &POD,
            ResourceKind::Rc => &RC,
            ResourceKind::Service => &SERVICE,
            ResourceKind::Container => &CONTAINER,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn collection(self) -> &'static str {
        self.spec().collection
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single server-owned record.
///
/// The raw field mapping is reachable through [`Resource::info`]; nothing else
/// about the record is interpreted on the client side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    info: Attributes,
}

impl Resource {
    /// Wraps a decoded response body, which must be a JSON object.
    pub fn from_value(value: Value) -> std::result::Result<Self, MagnumError> {
        match value {
            Value::Object(info) => Ok(Self { info }),
            other => Err(MagnumError::InvalidResponse(format!(
                "expected a JSON object, got: {}",
                other
            ))),
        }
    }

    /// The raw field mapping returned by the server.
    pub fn info(&self) -> &Attributes {
        &self.info
    }

    pub fn into_info(self) -> Attributes {
        self.info
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.info.get(name)
    }
}
