//! Command-line interface orchestration for rsgraph.
//!
//! `generate` builds one graph from any supported model and `compare` runs
//! the recursive models next to the classical baselines. Both report degree
//! distributions as text or JSON.

mod commands;
mod report;

pub use commands::{
    BarabasiAlbertArgs, BipartiteRandomArgs, Cli, CliError, Command, CompareCommand,
    ErdosRenyiArgs, GenerateCommand, Model, OutputArgs, RandomPartitionArgs, RandomRegularArgs,
    RecursiveTreeArgs, RsrbgArgs, RsrgArgs, SelectionArg, Side, TopologyArg, TriangulationArg,
    WattsStrogatzArgs, run_cli,
};
pub use report::{ExecutionSummary, ModelReport, OutputFormat, render_summary};
