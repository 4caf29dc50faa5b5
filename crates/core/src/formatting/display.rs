/// Formats a playback position as `minutes:seconds.hundredths`, e.g. `"2:03.50"`.
///
/// Returns `"-"` for a missing or non-finite value. Negative values (and
/// `-0.0`) display as zero. Hundredths round half up on the exact binary
/// value, so `0.125` shows as `"0:00.13"` while `1.005` (stored just below
/// the tie) shows as `"0:01.00"`.
pub fn format_seconds(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "-".to_string();
    };
    let v = if v > 0.0 { v } else { 0.0 };
    let minutes = (v / 60.0).floor() as u64;
    let cents = hundredths_half_up(v % 60.0);
    format!("{minutes}:{:02}.{:02}", cents / 100, cents % 100)
}

/// Rounds a non-negative value to whole hundredths, ties up.
///
/// Decided on the exact decimal expansion: every double at or above 0.005
/// has at most 60 fractional digits, so 64 digits hold the exact value
/// wherever the third digit can reach 5.
fn hundredths_half_up(value: f64) -> u64 {
    let exact = format!("{value:.64}");
    let frac = exact.split_once('.').map_or("", |(_, f)| f).as_bytes();
    let digit = |i: usize| frac.get(i).map_or(0, |d| u64::from(d.saturating_sub(b'0')));
    let cents = value.trunc() as u64 * 100 + digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents + 1
    } else {
        cents
    }
}

/// Final component of a `/`- or `\`-separated path, or the whole string.
pub fn file_name(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}
