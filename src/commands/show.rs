//! `evalview show` command - summarize the metrics of a results file

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_results, print_json};
use crate::output_by_format_result;
use evalview_core::error::Result;
use evalview_core::format::format_score;
use evalview_core::metric::MetricKind;
use evalview_core::records::{format_header, format_metric_record, quote};
use evalview_core::summary::{self, Summary};
use evalview_core::trace_time;

/// Execute the show command
pub fn execute(ctx: &CommandContext, file: &Path, only: &[MetricKind]) -> Result<()> {
    let results = load_results(ctx, file)?;
    let mut summary = summary::build(&results);
    if !only.is_empty() {
        summary.metrics.retain(|row| only.contains(&row.kind));
    }
    trace_time!(ctx.start, "build_summary", rows = summary.metrics.len());

    output_by_format_result!(ctx.format,
        json => print_json(&summary),
        human => { output_human(ctx, &summary); },
        records => { output_records(ctx, &summary); }
    )
}

fn output_human(ctx: &CommandContext, summary: &Summary) {
    let precision = ctx.precision();

    if !ctx.cli.quiet {
        println!("{}", summary.name);
        println!("  model:    {}", summary.model);
        println!("  dataset:  {}", summary.dataset);
        println!("  task:     {}", summary.task);
        println!("  samples:  {}", summary.sample_count);
        println!(
            "  time:     inference {:.2}s, evaluation {:.2}s",
            summary.inference_time, summary.evaluation_time
        );
        println!();
    }

    if summary.metrics.is_empty() {
        if !ctx.cli.quiet {
            println!("No metrics reported.");
        }
        return;
    }

    let width = summary
        .metrics
        .iter()
        .map(|row| row.metric.len())
        .max()
        .unwrap_or(0)
        .max("METRIC".len());

    println!(
        "{:<width$}  {:>5}  {:>p$}  {:>p$}  {:>p$}",
        "METRIC",
        "COUNT",
        "MEAN",
        "MIN",
        "MAX",
        width = width,
        p = precision + 3
    );
    for row in &summary.metrics {
        println!(
            "{:<width$}  {:>5}  {:>p$}  {:>p$}  {:>p$}",
            row.metric,
            row.count,
            format_score(Some(row.mean), precision),
            format_score(row.min, precision),
            format_score(row.max, precision),
            width = width,
            p = precision + 3
        );
    }
}

fn output_records(ctx: &CommandContext, summary: &Summary) {
    let precision = ctx.precision();
    println!(
        "{}",
        format_header(
            "show",
            &[
                ("name", quote(&summary.name)),
                ("model", quote(&summary.model)),
                ("samples", summary.sample_count.to_string()),
                ("metrics", summary.metrics.len().to_string()),
            ]
        )
    );
    for row in &summary.metrics {
        println!(
            "{}",
            format_metric_record(
                &row.metric,
                row.count,
                &format_score(Some(row.mean), precision),
                &[
                    ("min", format_score(row.min, precision)),
                    ("max", format_score(row.max, precision)),
                ]
            )
        );
    }
}
