//! Text formatting helpers for tool output.

/// Placeholder rendered for empty fields
pub const NONE_PLACEHOLDER: &str = "(none)";

/// Format an integer with `,` thousands separators (`220000` -> `220,000`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Return `value`, or `(none)` when it is empty
pub fn or_none(value: &str) -> &str {
    if value.is_empty() {
        NONE_PLACEHOLDER
    } else {
        value
    }
}
