const HOUR_UNITS: [&str; 4] = ["jam", "h", "hour", "hours"];

/// Minutes from a free-text duration label such as "45 menit" or "1 jam".
///
/// The first whitespace-separated token must be all ASCII digits and fit in
/// a `u32`, otherwise the label is worth 0 minutes. An hour unit in the
/// second token multiplies by 60.
pub fn parse_duration_minutes(label: &str) -> u32 {
    let mut tokens = label.split_whitespace();

    let value = match tokens.next() {
        Some(first) if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) => {
            first.parse::<u32>().unwrap_or(0)
        }
        _ => return 0,
    };

    match tokens.next() {
        Some(unit) if HOUR_UNITS.contains(&unit.to_lowercase().as_str()) => {
            value.saturating_mul(60)
        }
        _ => value,
    }
}

pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Group digits in threes with commas: 1550 -> "1,550"
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
