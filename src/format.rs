//! Display Formatting
//!
//! Currency and date rendering for the item table.

use chrono::{DateTime, Utc};

/// `1234.5` -> `$1,234.50`
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// `2024-01-15T10:30:00Z` -> `Jan 15, 2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(15.5), "$15.50");
        assert_eq!(format_price(19.999), "$20.00");
        assert_eq!(format_price(999.0), "$999.00");
        assert_eq!(format_price(1249.0), "$1,249.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_beyond_u64_range() {
        let price = crate::inventory::parse_price("1e20").unwrap();
        assert_eq!(format_price(price), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_price(2.5e17), "$250,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 5, 2024");
    }
}
