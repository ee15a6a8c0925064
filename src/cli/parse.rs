use evalview_core::format::OutputFormat;
use evalview_core::metric::MetricKind;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse metric kind from string
pub fn parse_metric_kind(s: &str) -> std::result::Result<MetricKind, String> {
    s.parse::<MetricKind>().map_err(|e| e.to_string())
}

/// Parse a non-negative, finite tolerance
pub fn parse_tolerance(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid tolerance: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("tolerance must be a non-negative number: {}", s));
    }
    Ok(value)
}

/// Parse a page size of at least one row
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(_) => Err(format!("invalid limit: {}", s)),
    }
}
