//! # Magnum Command Registry
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module declares every command the client accepts and routes each parsed
//! command to its handler. Command names follow `<kind>-<verb>`:
//!
//! | Kind | Commands |
//! |---|---|
//! | bay, baymodel, node, pod, rc, service | `-list`, `-create`, `-show`, `-delete` |
//! | container | the above plus `-start`, `-stop`, `-reboot`, `-pause`, `-unpause`, `-logs`, `-execute` |
//!
//! ## Architecture
//!
//! - `Command`: One `clap` subcommand per command name. Flags are declared on the
//!   per-command argument structs in the kind modules (`bay::CreateArgs`, ...).
//! - `dispatch`: Matches the command and calls exactly one handler, passing the
//!   gateway handle it was given.
//! - `shared`: The list/show/create/delete handlers common to every kind.
//!
//! Handlers keep no state between invocations and never call each other.
//!
use crate::{
    common::gateway::{ContainerAction, Gateway},
    core::{error::Result, resource::ResourceKind},
};
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::debug;

/// `bay-create` flags.
pub mod bay;
/// `baymodel-create` flags.
pub mod baymodel;
/// Container-only commands (`create`, `show`, lifecycle actions).
pub mod container;
/// `node-create` flags.
pub mod node;
/// `pod-create` flags and pod file handling.
pub mod pod;
/// `rc-create` flags.
pub mod rc;
/// `service-create` flags.
pub mod service;
/// Handlers shared by every resource kind.
pub mod shared;

/// # Resource ID Argument (`IdArgs`)
///
/// The single `--id` flag taken by every `show`, `delete`, and container action.
#[derive(Parser, Debug)]
pub struct IdArgs {
    /// ID of the resource.
    #[arg(long, value_name = "ID")]
    pub id: String,
}

/// Every command the client accepts.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a list of available bays.
    BayList,
    /// Create a bay.
    BayCreate(bay::CreateArgs),
    /// Delete a bay.
    BayDelete(IdArgs),
    /// Show details of a bay.
    BayShow(IdArgs),

    /// Print a list of bay models.
    BaymodelList,
    /// Create a bay model.
    BaymodelCreate(baymodel::CreateArgs),
    /// Delete a bay model.
    BaymodelDelete(IdArgs),
    /// Show details of a bay model.
    BaymodelShow(IdArgs),

    /// Print a list of configured nodes.
    NodeList,
    /// Create a node.
    NodeCreate(node::CreateArgs),
    /// Delete a node.
    NodeDelete(IdArgs),
    /// Show details of a node.
    NodeShow(IdArgs),

    /// Print a list of registered pods.
    PodList,
    /// Create a pod.
    PodCreate(pod::CreateArgs),
    /// Delete a pod.
    PodDelete(IdArgs),
    /// Show details of a pod.
    PodShow(IdArgs),

    /// Print a list of registered replication controllers.
    RcList,
    /// Create a replication controller.
    RcCreate(rc::CreateArgs),
    /// Delete a replication controller.
    RcDelete(IdArgs),
    /// Show details of a replication controller.
    RcShow(IdArgs),

    /// Print a list of services.
    ServiceList,
    /// Create a service.
    ServiceCreate(service::CreateArgs),
    /// Delete a service.
    ServiceDelete(IdArgs),
    /// Show details of a service.
    ServiceShow(IdArgs),

    /// Print a list of available containers.
    ContainerList,
    /// Create a container from a JSON body (file or standard input).
    ContainerCreate(container::create::CreateArgs),
    /// Delete a container.
    ContainerDelete(IdArgs),
    /// Show details of a container.
    ContainerShow(container::show::ShowArgs),
    /// Start a container.
    ContainerStart(IdArgs),
    /// Stop a container.
    ContainerStop(IdArgs),
    /// Reboot a container.
    ContainerReboot(IdArgs),
    /// Pause a container.
    ContainerPause(IdArgs),
    /// Unpause a container.
    ContainerUnpause(IdArgs),
    /// Print the logs of a container.
    ContainerLogs(IdArgs),
    /// Execute a command inside a container.
    ContainerExecute(container::actions::ExecuteArgs),
}

/// Names of every registered command, in declaration order.
pub fn command_names() -> Vec<String> {
    Command::augment_subcommands(clap::Command::new("magnum"))
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect()
}

/// # Dispatch Command (`dispatch`)
///
/// Routes a parsed command to its handler. Exactly one gateway call is made per
/// invocation; output is written to `out`.
pub async fn dispatch<G: Gateway, W: Write>(command: Command, gateway: &G, out: &mut W) -> Result<()> {
    debug!("Dispatching command: {:?}", command);
    match command {
        Command::BayList => shared::handle_list(gateway, ResourceKind::Bay, out).await,
        Command::BayCreate(args) => {
            shared::handle_create(gateway, ResourceKind::Bay, args.into_attributes(), out).await
        }
        Command::BayDelete(args) => shared::handle_delete(gateway, ResourceKind::Bay, &args.id).await,
        Command::BayShow(args) => shared::handle_show(gateway, ResourceKind::Bay, &args.id, out).await,

        Command::BaymodelList => shared::handle_list(gateway, ResourceKind::BayModel, out).await,
        Command::BaymodelCreate(args) => {
            shared::handle_create(gateway, ResourceKind::BayModel, args.into_attributes(), out)
                .await
        }
        Command::BaymodelDelete(args) => {
            shared::handle_delete(gateway, ResourceKind::BayModel, &args.id).await
        }
        Command::BaymodelShow(args) => {
            shared::handle_show(gateway, ResourceKind::BayModel, &args.id, out).await
        }

        Command::NodeList => shared::handle_list(gateway, ResourceKind::Node, out).await,
        Command::NodeCreate(args) => {
            shared::handle_create(gateway, ResourceKind::Node, args.into_attributes(), out).await
        }
        Command::NodeDelete(args) => shared::handle_delete(gateway, ResourceKind::Node, &args.id).await,
        Command::NodeShow(args) => shared::handle_show(gateway, ResourceKind::Node, &args.id, out).await,

        Command::PodList => shared::handle_list(gateway, ResourceKind::Pod, out).await,
        Command::PodCreate(args) => {
            let attributes = args.into_attributes()?;
            shared::handle_create(gateway, ResourceKind::Pod, attributes, out).await
        }
        Command::PodDelete(args) => shared::handle_delete(gateway, ResourceKind::Pod, &args.id).await,
        Command::PodShow(args) => shared::handle_show(gateway, ResourceKind::Pod, &args.id, out).await,

        Command::RcList => shared::handle_list(gateway, ResourceKind::Rc, out).await,
        Command::RcCreate(args) => {
            shared::handle_create(gateway, ResourceKind::Rc, args.into_attributes(), out).await
        }
        Command::RcDelete(args) => shared::handle_delete(gateway, ResourceKind::Rc, &args.id).await,
        Command::RcShow(args) => shared::handle_show(gateway, ResourceKind::Rc, &args.id, out).await,

        Command::ServiceList => shared::handle_list(gateway, ResourceKind::Service, out).await,
        Command::ServiceCreate(args) => {
            shared::handle_create(gateway, ResourceKind::Service, args.into_attributes(), out).await
        }
        Command::ServiceDelete(args) => {
            shared::handle_delete(gateway, ResourceKind::Service, &args.id).await
        }
        Command::ServiceShow(args) => {
            shared::handle_show(gateway, ResourceKind::Service, &args.id, out).await
        }

        Command::ContainerList => shared::handle_list(gateway, ResourceKind::Container, out).await,
        Command::ContainerCreate(args) => {
            let mut stdin = std::io::stdin().lock();
            container::create::handle_create(gateway, args, &mut stdin, out).await
        }
        Command::ContainerDelete(args) => {
            shared::handle_delete(gateway, ResourceKind::Container, &args.id).await
        }
        Command::ContainerShow(args) => container::show::handle_show(gateway, args, out).await,
        Command::ContainerStart(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Start, out).await
        }
        Command::ContainerStop(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Stop, out).await
        }
        Command::ContainerReboot(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Reboot, out).await
        }
        Command::ContainerPause(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Pause, out).await
        }
        Command::ContainerUnpause(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Unpause, out)
                .await
        }
        Command::ContainerLogs(args) => {
            container::actions::handle_action(gateway, &args.id, ContainerAction::Logs, out).await
        }
        Command::ContainerExecute(args) => {
            container::actions::handle_execute(gateway, args, out).await
        }
    }
}

// --- Unit Tests ---
// Parsing goes through a small wrapper so `Command` can be exercised the same
// way `main.rs` uses it.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::gateway::mock::{Call, MockGateway};

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> std::result::Result<Command, clap::Error> {
        let mut argv = vec!["magnum"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).map(|cli| cli.command)
    }

    #[test]
    fn test_command_names_cover_every_kind() {
        let names = command_names();
        for kind in ResourceKind::ALL {
            for verb in ["list", "create", "show", "delete"] {
                let name = format!("{}-{}", kind.name(), verb);
                assert!(names.contains(&name), "missing command {}", name);
            }
        }
        for action in ["start", "stop", "reboot", "pause", "unpause", "logs", "execute"] {
            let name = format!("container-{}", action);
            assert!(names.contains(&name), "missing command {}", name);
        }
        assert_eq!(names.len(), 7 * 4 + 7);
    }

    #[test]
    fn test_parses_kebab_case_command_names() {
        assert!(matches!(parse(&["baymodel-list"]), Ok(Command::BaymodelList)));
        assert!(matches!(parse(&["rc-show", "--id", "r-1"]), Ok(Command::RcShow(_))));
        assert!(matches!(
            parse(&["container-unpause", "--id", "c-1"]),
            Ok(Command::ContainerUnpause(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_command() {
        let err = parse(&["bay-frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_show_and_delete_require_id() {
        for command in ["bay-show", "bay-delete", "pod-delete", "container-start"] {
            let err = parse(&[command]).unwrap_err();
            assert_eq!(
                err.kind(),
                clap::error::ErrorKind::MissingRequiredArgument,
                "{} should require --id",
                command
            );
        }
    }

    #[tokio::test]
    async fn test_dispatch_makes_exactly_one_call() {
        let cases: Vec<(&[&str], Call)> = vec![
            (&["bay-list"][..], Call::List(ResourceKind::Bay)),
            (&["node-show", "--id", "n-1"][..], Call::Get(ResourceKind::Node, "n-1".into())),
            (&["rc-delete", "--id", "r-1"][..], Call::Delete(ResourceKind::Rc, "r-1".into())),
            (
                &["container-reboot", "--id", "c-1"][..],
                Call::Action("c-1".into(), ContainerAction::Reboot),
            ),
            (
                &["container-execute", "--id", "c-1", "--command", "uptime"][..],
                Call::Execute("c-1".into(), "uptime".into()),
            ),
        ];
        for (args, expected) in cases {
            let gateway = MockGateway::new();
            let mut out = Vec::new();
            dispatch(parse(args).unwrap(), &gateway, &mut out).await.unwrap();
            assert_eq!(gateway.calls(), vec![expected], "args {:?}", args);
        }
    }

    #[tokio::test]
    async fn test_dispatch_bay_create_sends_flags() {
        let gateway = MockGateway::new();
        let mut out = Vec::new();
        let command = parse(&["bay-create", "--name", "k8s", "--node_count", "2"]).unwrap();
        dispatch(command, &gateway, &mut out).await.unwrap();

        match gateway.calls().as_slice() {
            [Call::Create(ResourceKind::Bay, attributes)] => {
                assert_eq!(attributes.get("name"), Some(&serde_json::json!("k8s")));
                assert_eq!(attributes.get("node_count"), Some(&serde_json::json!(2)));
                assert!(!attributes.contains_key("baymodel_id"));
            }
            calls => panic!("unexpected calls: {:?}", calls),
        }
    }
}
