//! # Magnum API Gateway Interface
//!
//! File: cli/src/common/gateway/mod.rs
//!
//! ## Overview
//!
//! The gateway is the only part of the client that talks to the network. Command
//! handlers consume the `Gateway` trait and never see HTTP; the production
//! implementation lives in `http`, and tests substitute an in-memory `mock`.
//!
//! ## Architecture
//!
//! - **`Gateway`**: `list`, `get`, `create`, `delete` for every `ResourceKind`,
//!   plus the container lifecycle actions and `execute`.
//! - **`ContainerAction`**: The argument-less container actions and the HTTP
//!   method/path each one maps to.
//! - **`check_creation_attributes`**: The per-kind allow-list applied to create
//!   bodies before they are sent.
//! - **`http`**: `HttpGateway`, built on `reqwest`.
//!
//! Every method performs at most one request. Nothing here retries, batches, or
//! caches.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::gateway::{Gateway, HttpGateway};
//!
//! # async fn run_example(connection: &Connection) -> Result<()> {
//! let gateway = HttpGateway::new(connection)?;
//! let bays = gateway.list(ResourceKind::Bay).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{MagnumError, Result};
use crate::core::resource::{Attributes, Resource, ResourceKind};
use serde_json::Value;
use std::fmt;

/// HTTP implementation of the gateway.
pub mod http;
/// In-memory gateway used by handler tests.
#[cfg(test)]
pub mod mock;

pub use http::HttpGateway;

/// Container actions that take nothing but the container id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerAction {
    Start,
    Stop,
    Reboot,
    Pause,
    Unpause,
    Logs,
}

impl ContainerAction {
    /// Last path segment of the action URL.
    pub fn path(self) -> &'static str {
        match self {
            ContainerAction::Start => "start",
            ContainerAction::Stop => "stop",
            ContainerAction::Reboot => "reboot",
            ContainerAction::Pause => "pause",
            ContainerAction::Unpause => "unpause",
            ContainerAction::Logs => "logs",
        }
    }

    /// `logs` is a read; every other action changes container state.
    pub fn method(self) -> reqwest::Method {
        match self {
            ContainerAction::Logs => reqwest::Method::GET,
            _ => reqwest::Method::PUT,
        }
    }
}

impl fmt::Display for ContainerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Remote API consumed by the command handlers.
///
/// Errors returned by implementations are surfaced to the user unchanged.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Lists every resource of `kind`. No filters are applied.
    async fn list(&self, kind: ResourceKind) -> Result<Vec<Resource>>;

    async fn get(&self, kind: ResourceKind, id: &str) -> Result<Resource>;

    async fn create(&self, kind: ResourceKind, attributes: Attributes) -> Result<Resource>;

    async fn delete(&self, kind: ResourceKind, id: &str) -> Result<()>;

    /// Runs a container action; returns the response body, if any.
    async fn container_action(&self, id: &str, action: ContainerAction) -> Result<Option<Value>>;

    /// Executes `command` inside the container; returns the response body, if any.
    async fn container_execute(&self, id: &str, command: &str) -> Result<Option<Value>>;
}

/// Rejects keys that `kind` does not accept on creation.
pub fn check_creation_attributes(kind: ResourceKind, attributes: &Attributes) -> Result<()> {
    let allowed = kind.spec().creation_attributes;
    if let Some(attribute) = attributes.keys().find(|k| !allowed.contains(&k.as_str())) {
        anyhow::bail!(MagnumError::InvalidAttribute {
            kind: kind.name().to_string(),
            attribute: attribute.clone(),
            allowed: allowed.join(", "),
        });
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_container_action_routes() {
        assert_eq!(ContainerAction::Start.path(), "start");
        assert_eq!(ContainerAction::Unpause.path(), "unpause");
        assert_eq!(ContainerAction::Reboot.method(), reqwest::Method::PUT);
        assert_eq!(ContainerAction::Logs.method(), reqwest::Method::GET);
    }

    #[test]
    fn test_creation_attributes_accepted() {
        let attrs = attributes(json!({"name": "web", "image_id": "nginx"}));
        assert!(check_creation_attributes(ResourceKind::Container, &attrs).is_ok());

        let attrs = attributes(json!({"bay_uuid": "b-1", "pod_data": "kind: Pod"}));
        assert!(check_creation_attributes(ResourceKind::Pod, &attrs).is_ok());
    }

    #[test]
    fn test_creation_attributes_rejected() {
        let attrs = attributes(json!({"name": "web", "memory": "512m"}));
        let err = check_creation_attributes(ResourceKind::Container, &attrs).unwrap_err();
        match err.downcast_ref::<MagnumError>() {
            Some(MagnumError::InvalidAttribute { attribute, kind, .. }) => {
                assert_eq!(attribute, "memory");
                assert_eq!(kind, "container");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
