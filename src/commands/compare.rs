//! `evalview compare` command - metric deltas between two runs

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{ensure_single_stdin, load_results, print_json};
use crate::output_by_format_result;
use evalview_core::compare::{compare, Comparison};
use evalview_core::error::Result;
use evalview_core::format::{format_delta, format_score};
use evalview_core::metric::MetricKind;
use evalview_core::records::{format_header, quote};
use evalview_core::trace_time;

/// Execute the compare command
pub fn execute(
    ctx: &CommandContext,
    baseline: &Path,
    candidate: &Path,
    only: &[MetricKind],
) -> Result<()> {
    ensure_single_stdin([baseline, candidate])?;

    let baseline_results = load_results(ctx, baseline)?;
    let candidate_results = load_results(ctx, candidate)?;

    let mut comparison = compare(&baseline_results, &candidate_results);
    if !only.is_empty() {
        let keep = |metric: &str| {
            only.iter()
                .any(|kind| metric.split('.').next() == Some(kind.as_str()))
        };
        comparison.rows.retain(|row| keep(&row.metric));
        comparison.only_baseline.retain(|m| keep(m));
        comparison.only_candidate.retain(|m| keep(m));
    }
    trace_time!(ctx.start, "compare", rows = comparison.rows.len());

    output_by_format_result!(ctx.format,
        json => print_json(&comparison),
        human => { output_human(ctx, &comparison); },
        records => { output_records(ctx, &comparison); }
    )
}

fn output_human(ctx: &CommandContext, comparison: &Comparison) {
    let precision = ctx.precision();

    if !ctx.cli.quiet {
        println!("baseline:  {}", comparison.baseline_model);
        println!("candidate: {}", comparison.candidate_model);
        println!();
    }

    if comparison.rows.is_empty() {
        println!("No shared metrics to compare.");
    } else {
        let width = comparison
            .rows
            .iter()
            .map(|row| row.metric.len())
            .max()
            .unwrap_or(0)
            .max("METRIC".len());
        let p = precision + 3;

        println!(
            "{:<width$}  {:>p$}  {:>p$}  {:>p$}",
            "METRIC",
            "BASELINE",
            "CANDIDATE",
            "DELTA",
            width = width,
            p = p.max("CANDIDATE".len())
        );
        for row in &comparison.rows {
            println!(
                "{:<width$}  {:>p$}  {:>p$}  {:>p$}",
                row.metric,
                format_score(Some(row.baseline), precision),
                format_score(Some(row.candidate), precision),
                format_delta(row.delta, precision),
                width = width,
                p = p.max("CANDIDATE".len())
            );
        }
    }

    if !comparison.only_baseline.is_empty() {
        println!();
        println!("Only in baseline: {}", comparison.only_baseline.join(", "));
    }
    if !comparison.only_candidate.is_empty() {
        println!();
        println!("Only in candidate: {}", comparison.only_candidate.join(", "));
    }
}

fn output_records(ctx: &CommandContext, comparison: &Comparison) {
    let precision = ctx.precision();
    println!(
        "{}",
        format_header(
            "compare",
            &[
                ("baseline", quote(&comparison.baseline_model)),
                ("candidate", quote(&comparison.candidate_model)),
                ("shared", comparison.rows.len().to_string()),
            ]
        )
    );
    for row in &comparison.rows {
        println!(
            "C {} baseline={} candidate={} delta={}",
            row.metric,
            format_score(Some(row.baseline), precision),
            format_score(Some(row.candidate), precision),
            format_delta(row.delta, precision)
        );
    }
    for metric in &comparison.only_baseline {
        println!("C {} side=baseline", metric);
    }
    for metric in &comparison.only_candidate {
        println!("C {} side=candidate", metric);
    }
}
