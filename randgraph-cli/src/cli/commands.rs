//! Command implementations and argument parsing for the randgraph CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randgraph_core::{Graph, GraphKind, RandomGraphBuilder, ValidationError, Vertex, reseed};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "randgraph", about = "Generate random graphs over a set of vertices.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one random graph and print its adjacency.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Graph flavour to generate.
    #[arg(long, value_enum, default_value_t = KindArg::UndirectedCyclic)]
    pub kind: KindArg,

    /// Seed for a reproducible graph; a clock-derived seed is used otherwise.
    #[arg(long)]
    pub seed: Option<u64>,

    /// UTF-8 file with one vertex label per line; blank lines are skipped.
    #[arg(long, conflicts_with = "vertices")]
    pub input: Option<PathBuf>,

    /// Vertex labels, used when `--input` is absent.
    pub vertices: Vec<String>,
}

/// Graph flavours selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Symmetric edges; cycles permitted.
    UndirectedCyclic,
    /// One-way edges; no directed cycle.
    DirectedAcyclic,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::UndirectedCyclic => Self::UndirectedCyclic,
            KindArg::DirectedAcyclic => Self::DirectedAcyclic,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the vertex file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The vertex collection was rejected.
    #[error(transparent)]
    Core(#[from] ValidationError),
}

/// Outcome of a `generate` command.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Flavour that was generated.
    pub kind: GraphKind,
    /// Seed that reproduces this graph.
    pub seed: u64,
    /// The generated adjacency mapping.
    pub graph: Graph,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the vertex file cannot be read or the vertices
/// are rejected.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::{Cli, Command, GenerateCommand, KindArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         kind: KindArg::UndirectedCyclic,
///         seed: Some(7),
///         input: None,
///         vertices: vec!["a".into(), "b".into()],
///     }),
/// };
/// let summary = run_cli(cli).expect("two distinct vertices are valid");
/// assert_eq!(summary.graph.edge_count(), 2);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(kind = field::Empty, seed = field::Empty, source = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let GenerateCommand {
        kind,
        seed,
        input,
        vertices,
    } = command;
    let kind = GraphKind::from(kind);
    let span = Span::current();
    span.record("kind", field::display(kind));

    let vertices = match input {
        Some(path) => {
            span.record("source", field::display("file"));
            read_vertices(&path)?
        }
        None => {
            span.record("source", field::display("arguments"));
            vertices.into_iter().map(Vertex::from).collect()
        }
    };

    let seed = seed.unwrap_or_else(reseed);
    span.record("seed", seed);
    let graph = RandomGraphBuilder::new()
        .with_kind(kind)
        .with_rng_seed(seed)
        .build()
        .generate(&vertices)?;

    info!(
        kind = %kind,
        seed,
        vertices = graph.len(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(GenerationSummary { kind, seed, graph })
}

#[instrument(name = "cli.read_vertices", err, fields(path = field::Empty))]
pub(super) fn read_vertices(path: &Path) -> Result<Vec<Vertex>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    parse_vertices(reader).map_err(io_error)
}

/// Reads one label per line, trimming surrounding whitespace and skipping
/// blank lines.
pub(super) fn parse_vertices(reader: impl BufRead) -> io::Result<Vec<Vertex>> {
    let mut vertices = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            vertices.push(Vertex::from(label));
        }
    }
    Ok(vertices)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The header names the flavour, seed and sizes; each following line lists
/// one vertex and its outgoing neighbours.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{GenerationSummary, render_summary};
/// # use randgraph_core::{Graph, GraphKind};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = GenerationSummary {
///     kind: GraphKind::DirectedAcyclic,
///     seed: 1,
///     graph: [("a", vec!["b"]), ("b", vec![])].into_iter().collect::<Graph>(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "kind: directed-acyclic, seed: 1, vertices: 2, edges: 1\na: b\nb:\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = &summary.graph;
    writeln!(
        writer,
        "kind: {}, seed: {}, vertices: {}, edges: {}",
        summary.kind,
        summary.seed,
        graph.len(),
        graph.edge_count()
    )?;
    for (vertex, neighbours) in graph {
        write!(writer, "{vertex}:")?;
        for neighbour in neighbours {
            write!(writer, " {neighbour}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
