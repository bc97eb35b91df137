//! Command implementations and argument parsing for the simgraph CLI.

use std::fmt;
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use simgraph_core::{
    DEFAULT_COMPLETION, GenerationError, Group, GroupCompletion, GroupsGraphBuilder,
    SimulationGraph, barabasi_albert, connected_gnp_graph, seeded_rng,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "simgraph", about = "Generate synthetic graphs for simulations.")]
pub struct Cli {
    /// Seed for the random generator; drawn from entropy when omitted.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Generator to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported generators.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Random G(n,p) graph repaired into a single component.
    Connected(ConnectedCommand),
    /// Barabási–Albert preferential attachment graph.
    Attachment(AttachmentCommand),
    /// Connected groups joined by a few random edges.
    Groups(GroupsCommand),
}

/// Options accepted by the `connected` command.
#[derive(Debug, Args, Clone)]
pub struct ConnectedCommand {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Probability of each possible edge.
    #[arg(long, default_value_t = DEFAULT_COMPLETION)]
    pub completion: f64,
}

/// Options accepted by the `attachment` command.
#[derive(Debug, Args, Clone)]
pub struct AttachmentCommand {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Edges each new node attaches with.
    #[arg(long = "edges-per-node")]
    pub edges_per_node: usize,
}

/// Options accepted by the `groups` command.
#[derive(Debug, Args, Clone)]
pub struct GroupsCommand {
    /// Group sizes in order; repeat the flag or separate with commas.
    #[arg(long = "size", required = true, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Edge probability: one value for every group, or one per group.
    #[arg(long = "completion", value_delimiter = ',')]
    pub completions: Vec<f64>,

    /// Upper bound on edges drawn between each pair of groups.
    #[arg(long = "max-connections", default_value_t = 1)]
    pub max_connections: usize,
}

impl GroupsCommand {
    fn completion(&self) -> GroupCompletion {
        match self.completions.as_slice() {
            [] => GroupCompletion::Uniform(DEFAULT_COMPLETION),
            [single] => GroupCompletion::Uniform(*single),
            many => GroupCompletion::from(many),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The generator rejected its parameters.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Generator that produced an [`ExecutionSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// `connected` command.
    Connected,
    /// `attachment` command.
    Attachment,
    /// `groups` command.
    Groups,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connected => "connected",
            Self::Attachment => "attachment",
            Self::Groups => "groups",
        })
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Generator that ran.
    pub kind: GraphKind,
    /// Seed the generator was initialised with.
    pub seed: u64,
    /// Generated graph.
    pub graph: SimulationGraph,
    /// Groups of the graph; empty unless `kind` is [`GraphKind::Groups`].
    pub groups: Vec<Group>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the generator rejects its parameters.
///
/// # Examples
/// ```
/// use simgraph_cli::cli::{Cli, Command, ConnectedCommand, run_cli};
///
/// let cli = Cli {
///     seed: Some(7),
///     command: Command::Connected(ConnectedCommand { nodes: 10, completion: 0.2 }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.graph().node_count(), 10);
/// assert_eq!(summary.seed, 7);
/// # Ok::<(), simgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty, seed = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let span = Span::current();
    span.record("seed", seed);

    let summary = match cli.command {
        Command::Connected(command) => {
            span.record("command", field::display(GraphKind::Connected));
            run_connected(&command, seed)?
        }
        Command::Attachment(command) => {
            span.record("command", field::display(GraphKind::Attachment));
            run_attachment(&command, seed)?
        }
        Command::Groups(command) => {
            span.record("command", field::display(GraphKind::Groups));
            run_groups(&command, seed)?
        }
    };

    info!(
        kind = %summary.kind,
        nodes = summary.graph.graph().node_count(),
        edges = summary.graph.graph().edge_count(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn run_connected(
    command: &ConnectedCommand,
    seed: u64,
) -> Result<ExecutionSummary, CliError> {
    let graph = connected_gnp_graph(&mut seeded_rng(seed), command.nodes, command.completion)?;
    Ok(ExecutionSummary {
        kind: GraphKind::Connected,
        seed,
        graph,
        groups: Vec::new(),
    })
}

pub(super) fn run_attachment(
    command: &AttachmentCommand,
    seed: u64,
) -> Result<ExecutionSummary, CliError> {
    let graph = barabasi_albert(&mut seeded_rng(seed), command.nodes, command.edges_per_node)?;
    Ok(ExecutionSummary {
        kind: GraphKind::Attachment,
        seed,
        graph,
        groups: Vec::new(),
    })
}

pub(super) fn run_groups(command: &GroupsCommand, seed: u64) -> Result<ExecutionSummary, CliError> {
    let config = GroupsGraphBuilder::new()
        .with_group_sizes(command.sizes.clone())
        .with_completion(command.completion())
        .with_max_connections(command.max_connections)
        .build()?;
    let (graph, groups) = config.generate(&mut seeded_rng(seed))?.into_parts();
    Ok(ExecutionSummary {
        kind: GraphKind::Groups,
        seed,
        graph,
        groups,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use simgraph_cli::cli::{ExecutionSummary, GraphKind, render_summary};
/// # use simgraph_core::{Graph, SimulationGraph};
/// let summary = ExecutionSummary {
///     kind: GraphKind::Connected,
///     seed: 1,
///     graph: SimulationGraph::new(Graph::complete(3)),
///     groups: Vec::new(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8_lossy(&buffer),
///     "kind: connected\nseed: 1\nnodes: 3\nedges: 3\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = summary.graph.graph();
    writeln!(writer, "kind: {}", summary.kind)?;
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(writer, "nodes: {}", graph.node_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    for (index, group) in summary.groups.iter().enumerate() {
        writeln!(writer, "group {index}: {}..{}", group.start(), group.end())?;
    }
    Ok(())
}
