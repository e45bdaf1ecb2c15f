//! Display Helpers
//!
//! Text formatting shared by the card, modal and cart components.

/// `৳25`, `৳12.50`
pub fn format_price(symbol: &str, price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}{}", symbol, price as i64)
    } else {
        format!("{}{:.2}", symbol, price)
    }
}

/// Cut to at most `max_chars` characters, appending `…` when shortened
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}…", text[..byte_index].trim_end()),
    }
}

/// Cart line subtitle, one unit per line
pub fn line_quantity(symbol: &str, price: f64) -> String {
    format!("{} × 1", format_price(symbol, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("৳", 25.0), "৳25");
        assert_eq!(format_price("৳", 0.0), "৳0");
        assert_eq!(format_price("$", 12.5), "$12.50");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_description("Hardy succulent.", 100), "Hardy succulent.");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_description("Feathery fronds and bright light", 15), "Feathery fronds…");
        assert_eq!(truncate_description("Feathery fronds and bright light", 9), "Feathery…");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_description("গাছ গাছ গাছ", 3), "গাছ…");
    }

    #[test]
    fn test_line_quantity() {
        assert_eq!(line_quantity("৳", 10.0), "৳10 × 1");
    }
}
