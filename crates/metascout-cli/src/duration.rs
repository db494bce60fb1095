//! Human-readable duration flags.

/// Parses `"1500ms"`, `"15s"`, `"2m"` or plain milliseconds (`"1500"`) into
/// milliseconds. Used as a clap `value_parser`.
pub(crate) fn parse_duration_ms(raw: &str) -> Result<u64, String> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return Err("duration must not be empty".to_string());
    }

    if let Ok(ms) = s.parse::<u64>() {
        return Ok(ms);
    }

    let (num_str, unit_ms) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1u64)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000u64)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60_000u64)
    } else {
        return Err(format!(
            "invalid duration '{raw}': use a form like 1500ms, 15s or 2m"
        ));
    };

    num_str
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(unit_ms))
        .ok_or_else(|| format!("invalid duration '{raw}': use a form like 1500ms, 15s or 2m"))
}
