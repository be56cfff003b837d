use std::path::Path;

use super::{Metric, Opts, Output, OutputKind};
use crate::scan::Totals;

const TOTALS: Totals = Totals {
    parts: 4361,
    gears: 467835,
};

fn parse(args: &[&str]) -> Opts {
    match Opts::parse_from(args) {
        Ok(opts) => opts,
        Err(error) => panic!("{args:?}: {error}"),
    }
}

fn render(kind: OutputKind, metric: Metric) -> String {
    let mut out = Vec::new();

    if let Err(error) = Output::new(&mut out, kind).report(&TOTALS, metric) {
        panic!("{error}");
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn test_single_positional() {
    let opts = parse(&["input.txt"]);
    assert_eq!(opts.path.as_deref(), Some(Path::new("input.txt")));
    assert_eq!(opts.metric, Metric::Both);
    assert!(!opts.json);
    assert!(!opts.verbose);
}

#[test]
fn test_wrong_positional_count() {
    assert!(parse(&[]).path.is_none());
    assert!(parse(&["a.txt", "b.txt"]).path.is_none());
    assert!(parse(&["--json"]).path.is_none());
}

#[test]
fn test_flags() {
    let opts = parse(&["--verbose", "input.txt", "--json", "--parts"]);
    assert_eq!(opts.path.as_deref(), Some(Path::new("input.txt")));
    assert_eq!(opts.metric, Metric::Parts);
    assert!(opts.json);
    assert!(opts.verbose);
}

#[test]
fn test_unknown_flag_is_positional() {
    assert!(parse(&["--bench", "input.txt"]).path.is_none());
    assert_eq!(
        parse(&["--bench"]).path.as_deref(),
        Some(Path::new("--bench"))
    );
}

#[test]
fn test_separator() {
    let opts = parse(&["--gears", "--", "--json"]);
    assert_eq!(opts.path.as_deref(), Some(Path::new("--json")));
    assert_eq!(opts.metric, Metric::Gears);
    assert!(!opts.json);
}

#[test]
fn test_conflicting_metrics() {
    assert!(Opts::parse_from(["--parts", "--gears", "input.txt"]).is_err());
}

#[test]
fn test_normal_output() {
    assert_eq!(render(OutputKind::Normal, Metric::Both), "(4361, 467835)\n");
    assert_eq!(render(OutputKind::Normal, Metric::Parts), "4361\n");
    assert_eq!(render(OutputKind::Normal, Metric::Gears), "467835\n");
}

#[test]
fn test_json_output() {
    assert_eq!(
        render(OutputKind::Json, Metric::Both),
        "{\"type\":\"report\",\"data\":{\"parts\":4361,\"gears\":467835}}\n"
    );
    assert_eq!(
        render(OutputKind::Json, Metric::Gears),
        "{\"type\":\"report\",\"data\":{\"gears\":467835}}\n"
    );
}
