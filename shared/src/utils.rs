// Brazilian number formatting: parsing of human-entered decimal text and
// rendering of monetary/percentage values for the server-rendered pages.
pub mod brazilian_format {
    /// Glyph rendered in place of a value that could not be computed.
    pub const PLACEHOLDER: &str = "—";

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    ///
    /// '.' is always a thousands separator and the first ',' is the decimal
    /// separator. Empty or malformed input yields NaN rather than an error;
    /// downstream calculators check finiteness once.
    pub fn parse_decimal(s: &str) -> f64 {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replacen(',', ".", 1); // Replace decimal separator

        if normalized.is_empty() {
            return f64::NAN;
        }
        normalized.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Form fields arrive as `Option<String>`; an absent field parses the same
    /// as an empty one.
    pub fn parse_optional(s: Option<&str>) -> f64 {
        s.map_or(f64::NAN, parse_decimal)
    }

    /// Parses percentage text ("2,5" meaning 2.5%) into a decimal fraction.
    /// NaN propagates.
    pub fn parse_percent(s: &str) -> f64 {
        parse_decimal(s) / 100.0
    }

    pub fn parse_percent_optional(s: Option<&str>) -> f64 {
        s.map_or(f64::NAN, parse_percent)
    }

    /// Formats a plain decimal with `decimals` places, ',' as the decimal
    /// separator and '.' grouping thousands. Placeholder for non-finite input.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (whole, frac) = match formatted.split_once('.') {
            Some((w, f)) => (w.to_string(), Some(f.to_string())),
            None => (formatted, None),
        };

        let mut grouped = String::new();
        let len = whole.len();
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        // Sign from the rounded magnitude, not the raw value, so -0.001 at
        // two decimals renders "0,00" rather than "-0,00".
        let rounded_to_zero = grouped.chars().all(|c| c == '0')
            && frac.as_deref().map_or(true, |f| f.chars().all(|c| c == '0'));
        let sign = if value < 0.0 && !rounded_to_zero { "-" } else { "" };
        match frac {
            Some(f) => format!("{}{},{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Monetary display: "R$ 1.234,56". Placeholder for non-finite values.
    pub fn format_currency(value: f64) -> String {
        if !value.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!("R$ {}", format_decimal(value, 2))
    }

    /// Monthly-rate display for a decimal fraction: 0.02 -> "2,00% a.m.".
    pub fn format_percent_monthly(fraction: f64) -> String {
        if !fraction.is_finite() {
            return PLACEHOLDER.to_string();
        }
        format!("{}% a.m.", format_decimal(fraction * 100.0, 2))
    }

    /// Trims a free-text field; absent values become the empty string. Used by
    /// the contract/receipt generators, which must never fail on text input.
    pub fn clean_text(s: Option<&str>) -> String {
        s.map_or(String::new(), |v| v.trim().to_string())
    }

}
