const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Human-readable size with two decimals, e.g. `1.50 KB`.
pub fn format_file_size(bytes: i64) -> String {
    format_file_size_with_precision(bytes, 2)
}

/// Human-readable size in 1024 steps. Negative sizes render as `?`.
pub fn format_file_size_with_precision(bytes: i64, precision: usize) -> String {
    if bytes < 0 {
        return "?".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.*} {}", precision, value, UNITS[unit])
}
