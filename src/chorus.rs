// Chorus layout overrides read from the canvas markup:
//   <canvas data-snow data-chorus-starts="90,136,180" data-chorus-duration="22">
// An empty starts list is allowed and disables the effect.

pub const ATTR_CHORUS_STARTS: &str = "data-chorus-starts";
pub const ATTR_CHORUS_DURATION: &str = "data-chorus-duration";

/// Comma or whitespace separated seconds. `None` if any entry is not a
/// finite number.
pub fn parse_starts(raw: &str) -> Option<Vec<f64>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

pub fn parse_duration(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
