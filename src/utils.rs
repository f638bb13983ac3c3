use crate::chart::Attribute;

/// Pixel width reserved per bar when sizing the chart container.
pub const BAR_WIDTH_PX: usize = 20;

/// Renders milliseconds as `minutes:seconds` with zero-padded seconds.
///
/// Seconds are rounded before splitting, so 59.6s renders as `1:00` rather
/// than `0:60`. Negative input is treated as zero.
pub fn millis_to_minutes_and_seconds(millis: f64) -> String {
    let total_seconds = (millis.max(0.0) / 1000.0).round() as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats a number the way a chart axis shows it: no trailing `.0`.
pub fn format_number(value: f64) -> String {
    // avoid "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Formats a `[0, 1]` ratio as a percentage with `decimals` places of percent.
pub fn percent(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * 100.0 * factor).round() / factor;
    format!("{}%", format_number(rounded))
}

/// Builds the artist search query for an autocomplete term.
///
/// Terms without a `-` get a trailing `*` so partial names match.
pub fn search_query(term: &str) -> String {
    let mut query = term.trim().to_string();
    if !query.contains('-') {
        query.push('*');
    }
    query
}

pub fn chart_width(track_count: usize) -> usize {
    track_count * BAR_WIDTH_PX
}

pub fn format_bound(bound: Option<f64>) -> String {
    match bound {
        Some(b) => format_number(b),
        None => "-".to_string(),
    }
}

/// Clap value parser for attribute names.
pub fn parse_attribute(s: &str) -> Result<Attribute, String> {
    s.parse::<Attribute>().map_err(|e| e.to_string())
}
