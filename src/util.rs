// Small formatting helpers for the panels.

pub fn format_interval(ms: u32) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{:.1}s", f64::from(ms) / 1000.0)
    }
}

/// Shortest form for viewport numbers: `300`, `-12.5`.
pub fn format_coord(v: f64) -> String {
    format!("{}", v)
}
