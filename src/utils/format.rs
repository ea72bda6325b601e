use unicode_width::UnicodeWidthStr;

/// Format rupiah with Indonesian thousand separators: `Rp 25.000`.
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", group_thousands(amount))
}

pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Leading digits of user input, like a lenient integer parse.
fn leading_number(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Verse input; anything unreadable or zero becomes 1.
pub fn parse_verse(raw: &str) -> u32 {
    leading_number(raw)
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// Rupiah input; `.` and `,` group separators are ignored, anything
/// unreadable becomes 0.
pub fn parse_amount(raw: &str) -> u64 {
    let cleaned: String = raw.chars().filter(|c| *c != '.' && *c != ',').collect();
    leading_number(&cleaned).unwrap_or(0)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(percent: u32, width: usize) -> String {
    let ratio = (f64::from(percent) / 100.0).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Pad to a display width, counting wide characters correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(25000), "Rp 25.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
    }

    #[test]
    fn test_parse_verse() {
        assert_eq!(parse_verse("12"), 12);
        assert_eq!(parse_verse(" 7abc"), 7);
        assert_eq!(parse_verse(""), 1);
        assert_eq!(parse_verse("0"), 1);
        assert_eq!(parse_verse("-3"), 1);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("25000"), 25000);
        assert_eq!(parse_amount("25.000"), 25000);
        assert_eq!(parse_amount("Rp"), 0);
        assert_eq!(parse_amount(""), 0);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50, 10), "█████░░░░░");
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(150, 4), "████");
    }
}
