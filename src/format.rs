//! Presentation formatters.
//!
//! Pure functions that turn stored values into the strings shown on screen. Nothing
//! here touches the database.

use chrono::NaiveDate;

/// Placeholder shown for a property without an agent.
pub const PROPERTY_AGENT_PLACEHOLDER: &str = "Unassigned";
/// Placeholder shown for an inquiry without a property.
pub const INQUIRY_PROPERTY_PLACEHOLDER: &str = "N/A";
/// Placeholder shown for an inquiry without an agent.
pub const INQUIRY_AGENT_PLACEHOLDER: &str = "Unassigned";
/// Placeholder shown for a marketing entry without an agent.
pub const MARKETING_AGENT_PLACEHOLDER: &str = "None";

/// Two-tier abbreviation of an amount expressed in a base monetary unit.
///
/// Amounts below `major_unit` are shown in multiples of `minor_unit`; amounts at or
/// above it are shown in multiples of `major_unit`. The tier is picked on the exact
/// value before rounding to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyScale {
    /// Currency symbol prefixed to every amount
    pub symbol: &'static str,
    /// Size of the small display unit in base units
    pub minor_unit: f64,
    /// Suffix for the small display unit
    pub minor_suffix: &'static str,
    /// Size of the large display unit in base units; also the tier threshold
    pub major_unit: f64,
    /// Suffix for the large display unit
    pub major_suffix: &'static str,
}

/// Indian rupees in lakhs (1 L = 100 000) and crores (1 Cr = 100 L).
pub const INR: CurrencyScale = CurrencyScale {
    symbol: "₹",
    minor_unit: 100_000.0,
    minor_suffix: "L",
    major_unit: 10_000_000.0,
    major_suffix: "Cr",
};

impl CurrencyScale {
    /// Formats `value` (in base units) as e.g. `₹95.00 L` or `₹1.50 Cr`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value < self.major_unit {
            format!(
                "{}{:.2} {}",
                self.symbol,
                value / self.minor_unit,
                self.minor_suffix
            )
        } else {
            format!(
                "{}{:.2} {}",
                self.symbol,
                value / self.major_unit,
                self.major_suffix
            )
        }
    }
}

/// Formats a stored price in rupees; an absent price shows as zero.
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    INR.format(price.unwrap_or_default())
}

/// Formats a percentage with exactly one decimal; absent shows as `0.0%`.
#[must_use]
pub fn format_percentage(value: Option<f64>) -> String {
    format!("{:.1}%", value.unwrap_or_default())
}

/// Formats a bathroom count: whole numbers without a fraction, halves as `2.5`.
#[must_use]
pub fn format_bathrooms(value: Option<f64>) -> String {
    let count = value.unwrap_or_default();
    if count.fract() == 0.0 {
        format!("{count:.0}")
    } else {
        count.to_string()
    }
}

/// Formats a bedroom count; absent shows as `0`.
#[must_use]
pub fn format_bedrooms(value: Option<i32>) -> String {
    value.unwrap_or_default().to_string()
}

/// Formats a stored date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Absent text shows as an empty string.
#[must_use]
pub fn display_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Absent or empty text shows as `placeholder`.
#[must_use]
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lakh_tier() {
        assert_eq!(INR.format(9_500_000.0), "₹95.00 L");
        assert_eq!(INR.format(6_800_000.0), "₹68.00 L");
        assert_eq!(INR.format(150_000.0), "₹1.50 L");
        assert_eq!(INR.format(0.0), "₹0.00 L");
    }

    #[test]
    fn test_crore_tier() {
        assert_eq!(INR.format(150_000_000.0), "₹15.00 Cr");
        assert_eq!(INR.format(15_000_000.0), "₹1.50 Cr");
        assert_eq!(INR.format(35_000_000.0), "₹3.50 Cr");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(INR.format(10_000_000.0), "₹1.00 Cr");
    }

    #[test]
    fn test_tier_chosen_before_rounding() {
        // One rupee short of a crore stays in lakhs even though it rounds up to 100.
        assert_eq!(INR.format(9_999_999.0), "₹100.00 L");
        assert_eq!(INR.format(9_999_000.0), "₹99.99 L");
        assert_eq!(INR.format(10_004_999.0), "₹1.00 Cr");
        assert_eq!(INR.format(10_050_000.0), "₹1.00 Cr");
        assert_eq!(INR.format(10_060_000.0), "₹1.01 Cr");
    }

    #[test]
    fn test_custom_scale() {
        let dollars = CurrencyScale {
            symbol: "$",
            minor_unit: 1_000.0,
            minor_suffix: "K",
            major_unit: 1_000_000.0,
            major_suffix: "M",
        };
        assert_eq!(dollars.format(2_500.0), "$2.50 K");
        assert_eq!(dollars.format(3_000_000.0), "$3.00 M");
    }

    #[test]
    fn test_format_price_absent_is_zero() {
        assert_eq!(format_price(None), "₹0.00 L");
        assert_eq!(format_price(Some(22_500_000.0)), "₹2.25 Cr");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(Some(2.0)), "2.0%");
        assert_eq!(format_percentage(Some(1.75)), "1.8%");
        assert_eq!(format_percentage(Some(2.25)), "2.2%");
        assert_eq!(format_percentage(None), "0.0%");
    }

    #[test]
    fn test_bathrooms() {
        assert_eq!(format_bathrooms(Some(2.0)), "2");
        assert_eq!(format_bathrooms(Some(3.5)), "3.5");
        assert_eq!(format_bathrooms(Some(0.0)), "0");
        assert_eq!(format_bathrooms(None), "0");
    }

    #[test]
    fn test_bedrooms_and_dates() {
        assert_eq!(format_bedrooms(Some(3)), "3");
        assert_eq!(format_bedrooms(None), "0");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap_or_default();
        assert_eq!(format_date(date), "2024-03-09");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(or_placeholder(None, INQUIRY_PROPERTY_PLACEHOLDER), "N/A");
        assert_eq!(or_placeholder(Some(""), INQUIRY_AGENT_PLACEHOLDER), "Unassigned");
        assert_eq!(or_placeholder(Some("Priya"), MARKETING_AGENT_PLACEHOLDER), "Priya");
        assert_eq!(display_text(None), "");
        assert_eq!(display_text(Some("note")), "note");
    }
}
