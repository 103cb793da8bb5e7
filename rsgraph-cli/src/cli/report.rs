//! Degree-distribution reports and their text and JSON renderings.

use std::io::{self, Write};

use clap::ValueEnum;
use rsgraph_core::{DegreeDistribution, Graph, GraphError};
use serde::Serialize;

/// Output format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows preceded by a short header.
    #[default]
    Text,
    /// Pretty-printed JSON array of reports.
    Json,
}

/// Degree distribution of one generated graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelReport {
    /// Model label, including the projected side when relevant.
    pub model: String,
    /// Seed of the stream that produced the graph.
    pub seed: u64,
    /// Node and edge counts with the degree histogram.
    #[serde(flatten)]
    pub distribution: DegreeDistribution,
    /// Average degree.
    pub mean_degree: f64,
    /// Fraction of nodes per degree.
    pub pmf: Vec<f64>,
}

impl ModelReport {
    /// Summarises `graph` under `model`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `graph` has no nodes.
    pub fn new(model: impl Into<String>, seed: u64, graph: &Graph) -> Result<Self, GraphError> {
        let distribution = DegreeDistribution::from_graph(graph)?;
        Ok(Self {
            model: model.into(),
            seed,
            mean_degree: distribution.mean_degree(),
            pmf: distribution.pmf(),
            distribution,
        })
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Format requested on the command line.
    pub format: OutputFormat,
    /// One report per generated model, in generation order.
    pub reports: Vec<ModelReport>,
}

/// Renders `summary` to `writer` in its requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use rsgraph_cli::cli::{ExecutionSummary, ModelReport, OutputFormat, render_summary};
/// # use rsgraph_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = ExecutionSummary {
///     format: OutputFormat::Text,
///     reports: vec![ModelReport::new("path", 1, &Graph::path(3))?],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("model: path\nseed: 1\nnodes: 3\nedges: 2\n"));
/// assert!(text.ends_with("2\t1\t0.333333\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => {
            for (index, report) in summary.reports.iter().enumerate() {
                if index > 0 {
                    writeln!(writer)?;
                }
                render_text(report, &mut writer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &summary.reports)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn render_text(report: &ModelReport, writer: &mut impl Write) -> io::Result<()> {
    let distribution = &report.distribution;
    writeln!(writer, "model: {}", report.model)?;
    writeln!(writer, "seed: {}", report.seed)?;
    writeln!(writer, "nodes: {}", distribution.node_count())?;
    writeln!(writer, "edges: {}", distribution.edge_count())?;
    writeln!(writer, "mean degree: {:.3}", report.mean_degree)?;
    writeln!(writer, "degree\tcount\tprobability")?;
    for (degree, count, probability) in distribution.iter() {
        writeln!(writer, "{degree}\t{count}\t{probability:.6}")?;
    }
    Ok(())
}
