//! `evalview metrics` command - list known metric groups

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::print_json;
use crate::output_by_format_result;
use evalview_core::error::Result;
use evalview_core::metric::MetricKind;
use evalview_core::records::format_header;

#[derive(Serialize)]
struct MetricEntry {
    kind: MetricKind,
    series: Vec<String>,
}

fn entries() -> Vec<MetricEntry> {
    MetricKind::ALL
        .iter()
        .map(|kind| MetricEntry {
            kind: *kind,
            series: kind
                .series_names()
                .iter()
                .map(|name| format!("{}.{}", kind.as_str(), name))
                .collect(),
        })
        .collect()
}

/// Execute the metrics command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let entries = entries();

    output_by_format_result!(ctx.format,
        json => print_json(&entries),
        human => {
            for entry in &entries {
                println!("{:<10} {}", entry.kind.as_str(), entry.series.join(", "));
            }
        },
        records => {
            println!(
                "{}",
                format_header("metrics", &[("kinds", entries.len().to_string())])
            );
            for entry in &entries {
                for series in &entry.series {
                    println!("M {} kind={}", series, entry.kind.as_str());
                }
            }
        }
    )
}
