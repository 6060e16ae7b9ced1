use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Weight extraction
// ---------------------------------------------------------------------------

/// Mass expressions: `750g`, `1.5 kg`, `2 lb`, `12oz`.
static MASS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s?(kg|g|lb|oz)").expect("mass pattern"));

/// Count expressions: `6 pack`, `24 cans`. Matched so a count is still
/// recorded, but counts never convert to a mass.
static COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s?(pack|packs|pcs|pieces|bottles|cans|bags|boxes)")
        .expect("count pattern")
});

/// Find the first weight-like expression in a product title.
///
/// The mass pattern is tried before the count pattern, each scanning left to
/// right. The numeric value is returned as captured text to preserve the
/// original precision; the unit is lowercased. Returns `None` when neither
/// pattern matches.
pub fn extract_weight(title: &str) -> Option<(String, String)> {
    for pattern in [&*MASS_PATTERN, &*COUNT_PATTERN] {
        if let Some(caps) = pattern.captures(title) {
            let value = caps[1].to_string();
            let unit = caps[2].to_ascii_lowercase();
            return Some((value, unit));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Unit conversion
// ---------------------------------------------------------------------------

/// Convert a captured weight to kilograms.
///
/// Count units (pack, cans, ...) and unparseable numbers yield `None`;
/// records without a kilogram value are dropped downstream.
pub fn to_kilograms(weight: &str, unit: &str) -> Option<f64> {
    let weight: f64 = weight.parse().ok()?;
    match unit {
        "g" => Some(weight / 1000.0),
        "lb" => Some(weight * 0.453592),
        "oz" => Some(weight * 0.0283495),
        "kg" => Some(weight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_grams_any_case() {
        assert_eq!(
            extract_weight("Yogurt 500 G"),
            Some(("500".to_string(), "g".to_string()))
        );
        assert_eq!(
            extract_weight("Yogurt 500 g"),
            Some(("500".to_string(), "g".to_string()))
        );
    }

    #[test]
    fn extracts_decimal_kilograms_without_space() {
        assert_eq!(
            extract_weight("Flour 2.5kg bag"),
            Some(("2.5".to_string(), "kg".to_string()))
        );
    }

    #[test]
    fn mass_wins_over_count_when_both_present() {
        assert_eq!(
            extract_weight("Soda 6 pack 355 ml 2 lb"),
            Some(("2".to_string(), "lb".to_string()))
        );
    }

    #[test]
    fn falls_back_to_count_pattern() {
        assert_eq!(
            extract_weight("Water 24 bottles"),
            Some(("24".to_string(), "bottles".to_string()))
        );
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(extract_weight("Fresh Basil"), None);
    }

    #[test]
    fn converts_mass_units() {
        assert_eq!(to_kilograms("500", "g"), Some(0.5));
        assert_eq!(to_kilograms("1.5", "kg"), Some(1.5));
        let lb = to_kilograms("2", "lb").unwrap();
        assert!((lb - 0.907184).abs() < 1e-9);
        let oz = to_kilograms("12", "oz").unwrap();
        assert!((oz - 0.340194).abs() < 1e-6);
    }

    #[test]
    fn count_units_do_not_convert() {
        assert_eq!(to_kilograms("6", "pack"), None);
        assert_eq!(to_kilograms("24", "cans"), None);
    }

    #[test]
    fn non_numeric_weight_does_not_convert() {
        assert_eq!(to_kilograms("abc", "g"), None);
    }
}
