//! Command implementations and argument parsing for the rsgraph CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rsgraph_core::{
    BipartiteParams, Graph, GraphError, InitialTopology, Partition, SeededRandom, Selection,
    TriangulationRule, UnipartiteParams, barabasi_albert, erdos_renyi, generate_bipartite,
    generate_unipartite, project, random_bipartite, random_partition, random_recursive_tree,
    random_regular, watts_strogatz,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::{ExecutionSummary, ModelReport, OutputFormat};

const DEFAULT_NODES: usize = 50;
const DEFAULT_PROBABILITY: f64 = 0.3;
const DEFAULT_LATTICE_DEGREE: usize = 4;
const DEFAULT_ATTACHMENTS: usize = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "rsgraph",
    about = "Generate recursive scale-free graphs and report their degree distributions."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph and print its degree distribution.
    Generate(GenerateCommand),
    /// Run RSRG, RSRBG, Watts–Strogatz, Barabási–Albert and Erdős–Rényi with
    /// shared parameters.
    Compare(CompareCommand),
}

/// Options shared by every command.
#[derive(Debug, Args, Clone, Copy)]
pub struct OutputArgs {
    /// Seed for the random stream; drawn from entropy and reported when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Seed and output format.
    #[command(flatten)]
    pub output: OutputArgs,

    /// Model to generate.
    #[command(subcommand)]
    pub model: Model,
}

/// Graph models the `generate` command can build.
#[derive(Debug, Subcommand, Clone)]
pub enum Model {
    /// Random scale-free recursive graph.
    Rsrg(RsrgArgs),
    /// Random scale-free recursive bipartite graph.
    Rsrbg(RsrbgArgs),
    /// Watts–Strogatz small-world graph.
    WattsStrogatz(WattsStrogatzArgs),
    /// Barabási–Albert preferential attachment graph.
    BarabasiAlbert(BarabasiAlbertArgs),
    /// Erdős–Rényi `G(n, p)` graph.
    ErdosRenyi(ErdosRenyiArgs),
    /// Random partition graph.
    RandomPartition(RandomPartitionArgs),
    /// Uniform random regular graph.
    RandomRegular(RandomRegularArgs),
    /// Uniform random recursive tree.
    RecursiveTree(RecursiveTreeArgs),
    /// Random bipartite graph.
    BipartiteRandom(BipartiteRandomArgs),
}

/// Arguments for `generate rsrg`.
#[derive(Debug, Args, Clone, Copy)]
pub struct RsrgArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Triangulation probability.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub p: f64,

    /// Starting edge set.
    #[arg(long, value_enum, default_value_t = TopologyArg::SingleNode)]
    pub topology: TopologyArg,

    /// How attachment targets are drawn.
    #[arg(long, value_enum, default_value_t = SelectionArg::Filtered)]
    pub selection: SelectionArg,
}

/// Arguments for `generate rsrbg`.
#[derive(Debug, Args, Clone, Copy)]
pub struct RsrbgArgs {
    /// Number of LEFT nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub left: usize,

    /// Number of RIGHT nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub right: usize,

    /// Triangulation probability.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub p: f64,

    /// Which neighbours of the target may be triangulated.
    #[arg(long, value_enum, default_value_t = TriangulationArg::Literal)]
    pub triangulation: TriangulationArg,

    /// How attachment targets are drawn.
    #[arg(long, value_enum, default_value_t = SelectionArg::Filtered)]
    pub selection: SelectionArg,

    /// Report the projection onto one side instead of the bipartite graph.
    #[arg(long, value_enum)]
    pub project: Option<Side>,
}

/// Arguments for `generate watts-strogatz`.
#[derive(Debug, Args, Clone, Copy)]
pub struct WattsStrogatzArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Lattice degree; each node joins `k / 2` neighbours on either side.
    #[arg(long, default_value_t = DEFAULT_LATTICE_DEGREE)]
    pub k: usize,

    /// Rewiring probability.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub p: f64,
}

/// Arguments for `generate barabasi-albert`.
#[derive(Debug, Args, Clone, Copy)]
pub struct BarabasiAlbertArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edges added per new node.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENTS)]
    pub m: usize,
}

/// Arguments for `generate erdos-renyi`.
#[derive(Debug, Args, Clone, Copy)]
pub struct ErdosRenyiArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edge probability.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub p: f64,
}

/// Arguments for `generate random-partition`.
#[derive(Debug, Args, Clone)]
pub struct RandomPartitionArgs {
    /// Comma-separated block sizes.
    #[arg(long, value_delimiter = ',', required = true)]
    pub sizes: Vec<usize>,

    /// Edge probability inside a block.
    #[arg(long)]
    pub p_in: f64,

    /// Edge probability across blocks.
    #[arg(long)]
    pub p_out: f64,
}

/// Arguments for `generate random-regular`.
#[derive(Debug, Args, Clone, Copy)]
pub struct RandomRegularArgs {
    /// Degree of every node.
    #[arg(long)]
    pub degree: usize,

    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,
}

/// Arguments for `generate recursive-tree`.
#[derive(Debug, Args, Clone, Copy)]
pub struct RecursiveTreeArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,
}

/// Arguments for `generate bipartite-random`.
#[derive(Debug, Args, Clone, Copy)]
pub struct BipartiteRandomArgs {
    /// Number of LEFT nodes.
    #[arg(long)]
    pub left: usize,

    /// Number of RIGHT nodes.
    #[arg(long)]
    pub right: usize,

    /// Edge probability for each LEFT–RIGHT pair.
    #[arg(long)]
    pub p: f64,

    /// Report the projection onto one side instead of the bipartite graph.
    #[arg(long, value_enum)]
    pub project: Option<Side>,
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone, Copy)]
pub struct CompareCommand {
    /// Seed and output format.
    #[command(flatten)]
    pub output: OutputArgs,

    /// Node count for every model; RSRBG uses it for both sides.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Triangulation, rewiring and edge probability.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub p: f64,

    /// Watts–Strogatz lattice degree.
    #[arg(long, default_value_t = DEFAULT_LATTICE_DEGREE)]
    pub k: usize,

    /// Barabási–Albert edges per new node.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENTS)]
    pub m: usize,
}

/// Starting edge set for RSRG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopologyArg {
    /// Grow from node 1 alone.
    SingleNode,
    /// Start from the path `1 - 2 - ... - n`.
    Path,
}

impl From<TopologyArg> for InitialTopology {
    fn from(value: TopologyArg) -> Self {
        match value {
            TopologyArg::SingleNode => Self::SingleNode,
            TopologyArg::Path => Self::Path,
        }
    }
}

/// Attachment target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Draw once among qualifying nodes.
    Filtered,
    /// Redraw from every node until one qualifies, with a bounded budget.
    Rejection,
}

impl From<SelectionArg> for Selection {
    fn from(value: SelectionArg) -> Self {
        match value {
            SelectionArg::Filtered => Self::Filtered,
            SelectionArg::Rejection => Self::rejection(),
        }
    }
}

/// RSRBG triangulation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriangulationArg {
    /// Neighbours must not be LEFT nodes.
    Literal,
    /// Neighbours must sit opposite the target.
    OppositeOfTarget,
}

impl From<TriangulationArg> for TriangulationRule {
    fn from(value: TriangulationArg) -> Self {
        match value {
            TriangulationArg::Literal => Self::Literal,
            TriangulationArg::OppositeOfTarget => Self::OppositeOfTarget,
        }
    }
}

/// Bipartite side selected for projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// LEFT nodes.
    Left,
    /// RIGHT nodes.
    Right,
}

impl From<Side> for Partition {
    fn from(value: Side) -> Self {
        match value {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Graph generation or analysis failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a model rejects its arguments or cannot be
/// generated.
///
/// # Examples
/// ```
/// # use rsgraph_cli::cli::{
/// #     Cli, Command, GenerateCommand, Model, OutputArgs, OutputFormat, RecursiveTreeArgs, run_cli,
/// # };
/// #
/// # fn main() -> Result<(), rsgraph_cli::cli::CliError> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         output: OutputArgs { seed: Some(7), format: OutputFormat::Text },
///         model: Model::RecursiveTree(RecursiveTreeArgs { nodes: 10 }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.reports[0].distribution.edge_count(), 9);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            run_generate(generate)?
        }
        Command::Compare(compare) => {
            span.record("command", field::display("compare"));
            run_compare(compare)?
        }
    };
    info!(models = summary.reports.len(), "command completed");
    Ok(summary)
}

fn seeded(output: OutputArgs) -> SeededRandom {
    output
        .seed
        .map_or_else(SeededRandom::from_entropy, SeededRandom::new)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = field::Empty, seed = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let mut rng = seeded(command.output);
    let seed = rng.seed();
    let span = Span::current();
    span.record("seed", seed);

    let (label, graph) = build_model(command.model, &mut rng)?;
    span.record("model", field::display(&label));

    Ok(ExecutionSummary {
        format: command.output.format,
        reports: vec![ModelReport::new(label, seed, &graph)?],
    })
}

#[instrument(
    name = "cli.compare",
    err,
    skip(command),
    fields(nodes = command.nodes, p = command.p, seed = field::Empty),
)]
pub(super) fn run_compare(command: CompareCommand) -> Result<ExecutionSummary, CliError> {
    let base = seeded(command.output);
    Span::current().record("seed", base.seed());

    let CompareCommand { nodes, p, k, m, .. } = command;
    let models = [
        Model::Rsrg(RsrgArgs {
            nodes,
            p,
            topology: TopologyArg::SingleNode,
            selection: SelectionArg::Filtered,
        }),
        Model::Rsrbg(RsrbgArgs {
            left: nodes,
            right: nodes,
            p,
            triangulation: TriangulationArg::Literal,
            selection: SelectionArg::Filtered,
            project: None,
        }),
        Model::WattsStrogatz(WattsStrogatzArgs { nodes, k, p }),
        Model::BarabasiAlbert(BarabasiAlbertArgs { nodes, m }),
        Model::ErdosRenyi(ErdosRenyiArgs { nodes, p }),
    ];

    let mut reports = Vec::with_capacity(models.len());
    for (index, model) in models.into_iter().enumerate() {
        let mut rng = base.fork(index);
        let (label, graph) = build_model(model, &mut rng)?;
        reports.push(ModelReport::new(label, rng.seed(), &graph)?);
    }
    Ok(ExecutionSummary {
        format: command.output.format,
        reports,
    })
}

/// Builds `model` and returns its report label together with the graph.
pub(super) fn build_model(
    model: Model,
    rng: &mut SeededRandom,
) -> Result<(String, Graph), GraphError> {
    let built = match model {
        Model::Rsrg(args) => {
            let params = UnipartiteParams::new(args.nodes, args.p)?
                .with_initial_topology(args.topology.into())
                .with_selection(args.selection.into());
            ("rsrg".to_owned(), generate_unipartite(&params, rng)?)
        }
        Model::Rsrbg(args) => {
            let params = BipartiteParams::new(args.left, args.right, args.p)?
                .with_triangulation(args.triangulation.into())
                .with_selection(args.selection.into());
            projected("rsrbg", generate_bipartite(&params, rng)?, args.project)?
        }
        Model::WattsStrogatz(args) => (
            "watts-strogatz".to_owned(),
            watts_strogatz(args.nodes, args.k, args.p, rng)?,
        ),
        Model::BarabasiAlbert(args) => (
            "barabasi-albert".to_owned(),
            barabasi_albert(args.nodes, args.m, rng)?,
        ),
        Model::ErdosRenyi(args) => (
            "erdos-renyi".to_owned(),
            erdos_renyi(args.nodes, args.p, rng)?,
        ),
        Model::RandomPartition(args) => (
            "random-partition".to_owned(),
            random_partition(&args.sizes, args.p_in, args.p_out, rng)?,
        ),
        Model::RandomRegular(args) => (
            "random-regular".to_owned(),
            random_regular(args.degree, args.nodes, rng)?,
        ),
        Model::RecursiveTree(args) => (
            "recursive-tree".to_owned(),
            random_recursive_tree(args.nodes, rng)?,
        ),
        Model::BipartiteRandom(args) => projected(
            "bipartite-random",
            random_bipartite(args.left, args.right, args.p, rng)?,
            args.project,
        )?,
    };
    Ok(built)
}

fn projected(
    name: &str,
    graph: Graph,
    side: Option<Side>,
) -> Result<(String, Graph), GraphError> {
    let Some(chosen) = side else {
        return Ok((name.to_owned(), graph));
    };
    let partition = Partition::from(chosen);
    Ok((
        format!("{name} ({partition} projection)"),
        project(&graph, partition)?,
    ))
}
