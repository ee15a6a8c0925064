//! `evalview samples` command - page through per-example rows

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_results, print_json};
use crate::output_by_format_result;
use evalview_core::error::Result;
use evalview_core::format::{format_score, truncate_text};
use evalview_core::records::{format_header, quote};
use evalview_core::samples::{self, SamplePage};

/// Execute the samples command
pub fn execute(ctx: &CommandContext, file: &Path, offset: usize, limit: usize) -> Result<()> {
    let results = load_results(ctx, file)?;
    let page = samples::rows(&results, offset, limit);

    output_by_format_result!(ctx.format,
        json => print_json(&page),
        human => { output_human(ctx, &page); },
        records => { output_records(ctx, &page); }
    )
}

fn output_human(ctx: &CommandContext, page: &SamplePage) {
    let precision = ctx.precision();
    let width = ctx.config.display.text_width;

    if page.rows.is_empty() {
        if !ctx.cli.quiet {
            println!("No samples at offset {} ({} total)", page.offset, page.total);
        }
        return;
    }

    for row in &page.rows {
        println!("#{}", row.index);
        if let Some(example) = &row.example {
            println!("  input:      {}", truncate_text(example, width));
        }
        if let Some(truth) = &row.ground_truth {
            println!("  reference:  {}", truncate_text(truth, width));
        }
        println!("  prediction: {}", truncate_text(&row.prediction, width));
        if !row.scores.is_empty() {
            let scores: Vec<String> = row
                .scores
                .iter()
                .map(|(metric, value)| format!("{}={}", metric, format_score(Some(*value), precision)))
                .collect();
            println!("  scores:     {}", scores.join(" "));
        }
        println!();
    }

    if !ctx.cli.quiet {
        let first = page.offset;
        let last = page.offset + page.rows.len() - 1;
        print!("Showing {}-{} of {}", first, last, page.total);
        if page.has_more() {
            print!(" (next: --offset {})", last + 1);
        }
        println!();
    }
}

fn output_records(ctx: &CommandContext, page: &SamplePage) {
    let precision = ctx.precision();
    println!(
        "{}",
        format_header(
            "samples",
            &[
                ("total", page.total.to_string()),
                ("offset", page.offset.to_string()),
                ("count", page.rows.len().to_string()),
                ("truncated", page.has_more().to_string()),
            ]
        )
    );
    for row in &page.rows {
        let mut line = format!("S {} prediction={}", row.index, quote(&row.prediction));
        if let Some(truth) = &row.ground_truth {
            line.push_str(&format!(" reference={}", quote(truth)));
        }
        for (metric, value) in &row.scores {
            line.push_str(&format!(" {}={}", metric, format_score(Some(*value), precision)));
        }
        println!("{}", line);
    }
}
