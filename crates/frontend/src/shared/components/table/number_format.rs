//! pt-BR number formatting for table cells (`1.234,5`).

/// Formats with a fixed number of decimals, `.` as thousands separator and
/// `,` as decimal separator.
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) if !d.is_empty() => format!("{sign}{grouped},{d}"),
        _ => format!("{sign}{grouped}"),
    }
}

/// Quantity as shown in the stock tables: up to 3 decimals, trailing zeros
/// dropped.
pub fn format_quantity(value: f64) -> String {
    let full = format_number_with_decimals(value, 3);
    match full.split_once(',') {
        Some((integer, decimals)) => {
            let decimals = decimals.trim_end_matches('0');
            if decimals.is_empty() {
                integer.to_string()
            } else {
                format!("{integer},{decimals}")
            }
        }
        None => full,
    }
}
