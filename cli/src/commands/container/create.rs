//! # Magnum Container Create Handler
//!
//! File: cli/src/commands/container/create.rs
//!
//! ## Overview
//!
//! Implements `magnum container-create`. Unlike the other create commands, the
//! container body is free-form JSON supplied by the user, either from a file
//! (`--json <file>`) or from standard input when the flag is absent.
//!
//! ## Architecture
//!
//! 1. Read the body text from the file or stdin.
//! 2. Decode it; anything that is not a JSON object is rejected here, before the
//!    gateway is called.
//! 3. Send the decoded object as the creation attributes and render the result.
//!
//! ## Usage
//!
//! ```bash
//! echo '{"name": "web", "image_id": "nginx"}' | magnum container-create
//! magnum container-create --json ./web.json
//! ```
//!
use crate::{
    commands::shared,
    common::{fs::io, gateway::Gateway},
    core::{
        error::{MagnumError, Result},
        resource::{Attributes, ResourceKind},
    },
};
use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// # Container Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// JSON representation of container. Read from standard input when omitted.
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

/// Decodes a container body, which must be a JSON object.
pub fn parse_body(text: &str) -> Result<Attributes> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| MagnumError::InvalidJson(e.to_string()))?;
    match value {
        Value::Object(attributes) => Ok(attributes),
        other => Err(MagnumError::InvalidJson(format!(
            "expected a JSON object, got: {}",
            other
        ))
        .into()),
    }
}

fn read_body<R: Read>(args: &CreateArgs, stdin: &mut R) -> Result<Attributes> {
    let text = match &args.json {
        Some(path) => io::read_file_to_string(path)?,
        None => {
            debug!("Reading container JSON from standard input");
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read container JSON from standard input")?;
            text
        }
    };
    parse_body(&text)
}

/// Reads and validates the body, then creates the container.
pub async fn handle_create<G: Gateway, R: Read, W: Write>(
    gateway: &G,
    args: CreateArgs,
    stdin: &mut R,
    out: &mut W,
) -> Result<()> {
    let attributes = read_body(&args, stdin)?;
    shared::handle_create(gateway, ResourceKind::Container, attributes, out).await
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::gateway::mock::{Call, MockGateway};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_parse_body_object() {
        let attributes = parse_body(r#"{"name": "x"}"#).unwrap();
        assert_eq!(attributes.get("name"), Some(&json!("x")));
    }

    #[test]
    fn test_parse_body_rejects_non_objects() {
        let err = parse_body(r#"["name", "x"]"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[tokio::test]
    async fn test_create_from_stdin() {
        let gateway = MockGateway::new();
        let args = CreateArgs::try_parse_from(["container-create"]).unwrap();
        let mut stdin = r#"{"name": "x"}"#.as_bytes();
        let mut out = Vec::new();
        handle_create(&gateway, args, &mut stdin, &mut out).await.unwrap();

        let mut expected = Attributes::new();
        expected.insert("name".into(), json!("x"));
        assert_eq!(
            gateway.calls(),
            vec![Call::Create(ResourceKind::Container, expected)]
        );
    }

    #[tokio::test]
    async fn test_truncated_stdin_fails_before_gateway() {
        let gateway = MockGateway::new();
        let args = CreateArgs::try_parse_from(["container-create"]).unwrap();
        let mut stdin = r#"{"name": "x""#.as_bytes();
        let mut out = Vec::new();
        let err = handle_create(&gateway, args, &mut stdin, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MagnumError>(),
            Some(MagnumError::InvalidJson(_))
        ));
        assert!(gateway.calls().is_empty(), "gateway must not be called");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_create_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("web.json");
        std::fs::write(&file, r#"{"name": "web", "image_id": "nginx"}"#).unwrap();

        let gateway = MockGateway::new();
        let args =
            CreateArgs::try_parse_from(["container-create", "--json", file.to_str().unwrap()])
                .unwrap();
        let mut stdin = "ignored".as_bytes();
        let mut out = Vec::new();
        handle_create(&gateway, args, &mut stdin, &mut out).await.unwrap();

        match gateway.calls().as_slice() {
            [Call::Create(ResourceKind::Container, attributes)] => {
                assert_eq!(attributes.get("image_id"), Some(&json!("nginx")));
            }
            calls => panic!("unexpected calls: {:?}", calls),
        }
    }

    #[tokio::test]
    async fn test_missing_json_file_fails_before_gateway() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let gateway = MockGateway::new();
        let args =
            CreateArgs::try_parse_from(["container-create", "--json", missing.to_str().unwrap()])
                .unwrap();
        let mut stdin = "".as_bytes();
        let mut out = Vec::new();
        let err = handle_create(&gateway, args, &mut stdin, &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("File not found"));
        assert!(gateway.calls().is_empty());
    }
}
