//! # Magnum Container Action Handlers
//!
//! File: cli/src/commands/container/actions.rs
//!
//! ## Overview
//!
//! Implements the container lifecycle commands (`container-start`, `-stop`,
//! `-reboot`, `-pause`, `-unpause`), `container-logs`, and `container-execute`.
//! Each one is a single gateway call; whatever the server sends back (log text,
//! command output) is printed as-is.
//!
//! ```bash
//! magnum container-start --id c-1
//! magnum container-logs --id c-1
//! magnum container-execute --id c-1 --command "ls /"
//! ```
//!
//! `--command` must be non-empty. The check happens in the flag's value parser,
//! so `--command ""` is a usage error and no request is made.
//!
use crate::{
    common::gateway::{ContainerAction, Gateway},
    core::error::Result,
};
use clap::{builder::NonEmptyStringValueParser, Parser};
use serde_json::Value;
use std::io::Write;
use tracing::info;

/// # Container Execute Arguments (`ExecuteArgs`)
#[derive(Parser, Debug)]
pub struct ExecuteArgs {
    /// ID of the container to execute the command in.
    #[arg(long, value_name = "CONTAINER_ID")]
    id: String,

    /// The command to execute.
    #[arg(long, value_name = "COMMAND", value_parser = NonEmptyStringValueParser::new())]
    command: String,
}

pub async fn handle_action<G: Gateway, W: Write>(
    gateway: &G,
    id: &str,
    action: ContainerAction,
    out: &mut W,
) -> Result<()> {
    info!("Running '{}' on container '{}'", action, id);
    let output = gateway.container_action(id, action).await?;
    print_output(out, output)
}

pub async fn handle_execute<G: Gateway, W: Write>(
    gateway: &G,
    args: ExecuteArgs,
    out: &mut W,
) -> Result<()> {
    info!("Executing '{}' in container '{}'", args.command, args.id);
    let output = gateway.container_execute(&args.id, &args.command).await?;
    print_output(out, output)
}

/// Prints an action response: plain text as-is, `{"output": ...}` unwrapped,
/// anything else as pretty JSON.
fn print_output<W: Write>(out: &mut W, output: Option<Value>) -> Result<()> {
    let text = match output {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::String(text)) => text,
        Some(Value::Object(mut map)) => match map.remove("output") {
            Some(Value::String(text)) => text,
            Some(other) => {
                map.insert("output".to_string(), other);
                serde_json::to_string_pretty(&map)?
            }
            None => serde_json::to_string_pretty(&map)?,
        },
        Some(other) => serde_json::to_string_pretty(&other)?,
    };
    if text.ends_with('\n') {
        write!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}
