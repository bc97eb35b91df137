//! Unit tests for the CLI commands and summary rendering.

use super::commands::{run_attachment, run_connected, run_groups};
use super::{
    AttachmentCommand, Cli, CliError, Command, ConnectedCommand, ExecutionSummary, GraphKind,
    GroupsCommand, render_summary, run_cli,
};

use clap::Parser;
use rstest::rstest;
use simgraph_core::{GenerationError, Graph, Group, SimulationGraph};
use tracing_subscriber::layer::SubscriberExt;

use simgraph_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn groups_command(
    sizes: Vec<usize>,
    completions: Vec<f64>,
    max_connections: usize,
) -> GroupsCommand {
    GroupsCommand {
        sizes,
        completions,
        max_connections,
    }
}

#[rstest]
fn connected_command_generates_requested_nodes() -> TestResult {
    let summary = run_connected(
        &ConnectedCommand {
            nodes: 25,
            completion: 0.1,
        },
        3,
    )?;
    assert_eq!(summary.kind, GraphKind::Connected);
    assert_eq!(summary.graph.graph().node_count(), 25);
    assert!(summary.graph.graph().is_connected());
    assert!(summary.groups.is_empty());
    Ok(())
}

#[rstest]
fn attachment_command_rejects_large_m() {
    let err = run_attachment(
        &AttachmentCommand {
            nodes: 3,
            edges_per_node: 3,
        },
        1,
    )
    .expect_err("m >= n must fail");
    assert!(matches!(
        err,
        CliError::Generation(GenerationError::InvalidParameter { .. })
    ));
}

#[rstest]
#[case::defaulted(vec![], 3)]
#[case::broadcast(vec![0.4], 3)]
#[case::per_group(vec![0.9, 0.1, 0.5], 3)]
fn groups_command_accepts_completion_forms(
    #[case] completions: Vec<f64>,
    #[case] expected_groups: usize,
) -> TestResult {
    let summary = run_groups(&groups_command(vec![4, 5, 6], completions, 2), 11)?;
    assert_eq!(summary.groups.len(), expected_groups);
    assert_eq!(summary.graph.graph().node_count(), 15);
    assert_eq!(summary.groups[2], Group::new(9, 6));
    Ok(())
}

#[rstest]
fn groups_command_reports_length_mismatch() {
    let err = run_groups(&groups_command(vec![10, 20], vec![0.5, 0.5, 0.5], 3), 1)
        .expect_err("mismatched completions must fail");
    assert!(matches!(
        err,
        CliError::Generation(GenerationError::Configuration {
            group_sizes: 2,
            completions: 3,
        })
    ));
}

#[rstest]
fn equal_seeds_give_equal_summaries() -> TestResult {
    let command = groups_command(vec![6, 6], vec![0.3], 2);
    let first = run_groups(&command, 5)?;
    let second = run_groups(&command, 5)?;
    assert_eq!(first.graph, second.graph);
    Ok(())
}

#[rstest]
fn clap_parses_groups_arguments() -> TestResult {
    let cli = Cli::try_parse_from([
        "simgraph",
        "groups",
        "--size",
        "10,20",
        "--size",
        "5",
        "--completion",
        "0.5",
        "--max-connections",
        "4",
        "--seed",
        "9",
    ])?;
    assert_eq!(cli.seed, Some(9));
    match cli.command {
        Command::Groups(command) => {
            assert_eq!(command.sizes, vec![10, 20, 5]);
            assert_eq!(command.completions, vec![0.5]);
            assert_eq!(command.max_connections, 4);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::missing_sizes(&["simgraph", "groups"][..])]
#[case::missing_nodes(&["simgraph", "connected"][..])]
#[case::bad_number(&["simgraph", "attachment", "--nodes", "ten", "--edges-per-node", "2"][..])]
fn clap_rejects_incomplete_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn run_cli_records_command_span() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        seed: Some(42),
        command: Command::Attachment(AttachmentCommand {
            nodes: 12,
            edges_per_node: 2,
        }),
    };

    let summary = tracing::subscriber::with_default(subscriber, || run_cli(cli))?;
    assert_eq!(summary.graph.graph().edge_count(), 20);

    let span = layer.span("cli.run").ok_or("cli.run span must be recorded")?;
    assert_eq!(span.fields.get("command").map(String::as_str), Some("attachment"));
    assert_eq!(span.fields.get("seed").map(String::as_str), Some("42"));
    assert_eq!(layer.events_with_message("command completed").len(), 1);
    Ok(())
}

#[rstest]
fn render_summary_lists_groups() -> TestResult {
    let mut graph = Graph::with_nodes(5);
    graph.add_edge(0, 1)?;
    graph.add_edge(1, 2)?;
    graph.add_edge(3, 4)?;
    graph.add_edge(2, 3)?;
    let summary = ExecutionSummary {
        kind: GraphKind::Groups,
        seed: 17,
        graph: SimulationGraph::new(graph),
        groups: vec![Group::new(0, 3), Group::new(3, 2)],
    };

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(
        text,
        "kind: groups\nseed: 17\nnodes: 5\nedges: 4\ngroup 0: 0..3\ngroup 1: 3..5\n"
    );
    Ok(())
}
