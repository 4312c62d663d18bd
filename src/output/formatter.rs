// Tue Jan 13 2026 - Alex

/// `0x` followed by upper-case hex, zero padded to `pad` digits.
pub fn format_hex(value: u64, pad: usize) -> String {
    format!("0x{:0width$X}", value, width = pad)
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

/// Percentage of `used` over `capacity`, rounded to one decimal place.
pub fn percent_of(used: u64, capacity: u64) -> Option<f64> {
    if capacity == 0 {
        return None;
    }
    let percent = used as f64 * 100.0 / capacity as f64;
    Some((percent * 10.0).round() / 10.0)
}

pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}%", p),
        None => "n/a".to_string(),
    }
}
