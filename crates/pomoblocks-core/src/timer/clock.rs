/// Render a second count as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at 60, so 3000 renders as `50:00`. Negative
/// values get a leading `-`.
pub fn format_mm_ss(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}
