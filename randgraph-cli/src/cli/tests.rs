//! Unit tests for the CLI commands and vertex ingestion helpers.

use super::commands::{parse_vertices, read_vertices, run_generate};
use super::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, KindArg, render_summary, run_cli,
};

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use randgraph_core::{Graph, GraphKind, ValidationError, Vertex};
use randgraph_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn command(kind: KindArg, labels: &[&str]) -> GenerateCommand {
    GenerateCommand {
        kind,
        seed: Some(11),
        input: None,
        vertices: labels.iter().map(|label| (*label).to_owned()).collect(),
    }
}

fn write_vertex_file(dir: &TempDir, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.path().join("vertices.txt");
    fs::write(&path, contents)?;
    Ok(path)
}

#[rstest]
#[case::defaults(&["randgraph", "generate", "a", "b"], KindArg::UndirectedCyclic, None)]
#[case::acyclic(
    &["randgraph", "generate", "--kind", "directed-acyclic", "a", "b"],
    KindArg::DirectedAcyclic,
    None,
)]
#[case::seeded(&["randgraph", "generate", "--seed", "5", "a", "b"], KindArg::UndirectedCyclic, Some(5))]
fn parses_generate_arguments(
    #[case] args: &[&str],
    #[case] kind: KindArg,
    #[case] seed: Option<u64>,
) {
    let cli = Cli::try_parse_from(args).expect("arguments must parse");
    let Command::Generate(generate) = cli.command;
    assert_eq!(generate.kind, kind);
    assert_eq!(generate.seed, seed);
    assert_eq!(generate.vertices, ["a", "b"]);
}

#[rstest]
#[case::unknown_kind(&["randgraph", "generate", "--kind", "tree", "a", "b"])]
#[case::input_and_positionals(&["randgraph", "generate", "--input", "v.txt", "a", "b"])]
fn rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
#[case::undirected(KindArg::UndirectedCyclic)]
#[case::acyclic(KindArg::DirectedAcyclic)]
fn generate_is_reproducible_with_seed(#[case] kind: KindArg) -> TestResult {
    let labels = ["a", "b", "c", "d", "e"];
    let first = run_generate(command(kind, &labels))?;
    let second = run_generate(command(kind, &labels))?;
    assert_eq!(first.graph, second.graph);
    assert_eq!(first.seed, 11);
    assert_eq!(first.kind, GraphKind::from(kind));
    first
        .graph
        .invariants()
        .check_many(first.kind.invariants().iter().copied())?;
    Ok(())
}

#[test]
fn generate_without_seed_reports_the_seed_used() -> TestResult {
    let mut unseeded = command(KindArg::DirectedAcyclic, &["a", "b", "c"]);
    unseeded.seed = None;
    let summary = run_generate(unseeded)?;

    let replay = run_generate(GenerateCommand {
        seed: Some(summary.seed),
        ..command(KindArg::DirectedAcyclic, &["a", "b", "c"])
    })?;
    assert_eq!(summary.graph, replay.graph);
    Ok(())
}

#[rstest]
#[case::empty(&[], ValidationError::InvalidInput { len: 0 })]
#[case::single(&["a"], ValidationError::InvalidInput { len: 1 })]
#[case::duplicate(
    &["a", "b", "c", "b"],
    ValidationError::DuplicateVertex { vertex: Vertex::from("b") },
)]
fn generate_surfaces_validation_errors(#[case] labels: &[&str], #[case] expected: ValidationError) {
    let cli = Cli {
        command: Command::Generate(command(KindArg::UndirectedCyclic, labels)),
    };
    match run_cli(cli) {
        Err(CliError::Core(err)) => assert_eq!(err, expected),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn generate_reads_vertices_from_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_vertex_file(&dir, "alpha\n\n  beta  \r\ngamma\n")?;
    let summary = run_generate(GenerateCommand {
        input: Some(path),
        ..command(KindArg::UndirectedCyclic, &[])
    })?;
    assert_eq!(summary.graph.len(), 3);
    assert!(summary.graph.contains_vertex("beta"));
    Ok(())
}

#[test]
fn missing_vertex_file_is_an_io_error() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.txt");
    match read_vertices(&path) {
        Err(CliError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected I/O failure, got {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::plain("a\nb\n", &["a", "b"])]
#[case::blank_lines("\n\na\n\n", &["a"])]
#[case::crlf("a\r\nb\r\n", &["a", "b"])]
#[case::padded("  a \n\tb\t\n", &["a", "b"])]
#[case::duplicates_kept("a\na\n", &["a", "a"])]
fn parse_vertices_trims_and_skips_blanks(#[case] raw: &str, #[case] expected: &[&str]) {
    let parsed = parse_vertices(Cursor::new(raw)).expect("in-memory reads succeed");
    let labels: Vec<&str> = parsed.iter().map(Vertex::as_str).collect();
    assert_eq!(labels, expected);
}

#[test]
fn render_summary_lists_each_vertex() -> TestResult {
    let graph: Graph = [("a", vec!["b", "c"]), ("b", vec!["a"]), ("c", vec!["a"])]
        .into_iter()
        .collect();
    let summary = GenerationSummary {
        kind: GraphKind::UndirectedCyclic,
        seed: 3,
        graph,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer)?,
        "kind: undirected-cyclic, seed: 3, vertices: 3, edges: 4\na: b c\nb: a\nc: a\n"
    );
    Ok(())
}

#[test]
fn generate_records_span_fields() -> TestResult {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        command: Command::Generate(command(KindArg::DirectedAcyclic, &["a", "b", "c"])),
    };
    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let spans = layer.spans_named("cli.generate");
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.field("kind"), Some("directed-acyclic"));
    assert_eq!(span.field("seed"), Some("11"));
    assert_eq!(span.field("source"), Some("arguments"));

    let run = layer.spans_named("cli.run");
    assert_eq!(run.len(), 1);
    assert_eq!(run[0].field("command"), Some("generate"));

    let completed = layer.events_with_message("command completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].field("vertices"), Some("3"));
    Ok(())
}
