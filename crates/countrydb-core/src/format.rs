// crates/countrydb-core/src/format.rs

/// Formats a population with `en-US` thousands separators.
///
/// ```rust
/// use countrydb_core::format_population;
///
/// assert_eq!(format_population(1_380_004_385), "1,380,004,385");
/// assert_eq!(format_population(451), "451");
/// ```
pub fn format_population(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Formats an area in km²: grouped integer part, at most three fraction
/// digits (trailing zeros trimmed), e.g. `"357,114 km²"` or `"0.44 km²"`.
pub fn format_area(km2: f64) -> String {
    let fixed = format!("{:.3}", km2);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out.push_str(" km²");
    out
}

fn group_thousands(digits: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_groups() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(83_240_525), "83,240,525");
        assert_eq!(format_population(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn area_trims_fraction() {
        assert_eq!(format_area(357_114.0), "357,114 km²");
        assert_eq!(format_area(0.44), "0.44 km²");
        assert_eq!(format_area(49.0), "49 km²");
        assert_eq!(format_area(1234.5678), "1,234.568 km²");
    }
}
