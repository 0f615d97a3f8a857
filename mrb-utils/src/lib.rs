//! Shared utility functions for MRB crates.

/// Number and text formatting for popups, legends and chart labels.
pub mod format {
    /// Largest number of fraction digits kept when formatting.
    pub const MAX_FRACTION_DIGITS: usize = 3;

    /// Format a number with thousands separators, in the style of an
    /// en-US `Intl.NumberFormat`: at most three fraction digits, rounded
    /// half away from zero, trailing zeros dropped.
    ///
    /// e.g. `1234567.0` -> `"1,234,567"`, `0.12345` -> `"0.123"`
    pub fn format_with_commas(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
        let scaled = value.abs() * scale;
        // near f64::MAX the multiply overflows; such values have no fraction anyway
        let rounded = if scaled.is_finite() {
            scaled.round() / scale
        } else {
            value.abs()
        };
        let text = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
        let (int_part, frac_part) = match text.split_once('.') {
            Some(parts) => parts,
            None => (text.as_str(), ""),
        };

        let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
        if value < 0.0 && rounded != 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(int_part));

        let frac = frac_part.trim_end_matches('0');
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// Insert a comma between every group of three digits, counting from the right.
    pub fn group_thousands(digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Escape text for safe inclusion in an HTML fragment.
    pub fn escape_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        out
    }

}
