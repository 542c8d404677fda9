//! Display formatting shared by the renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Number of stars in a rating scale.
pub const RATING_SCALE: u8 = 5;

/// Render a size expressed in MB as GB with two decimals.
#[must_use]
pub fn size_label(size_mb: f64) -> String {
    format!("{:.2} GB", round_half_up(size_mb / 1024.0, 100.0))
}

/// Render an average rating with one decimal, or `na` when absent.
#[must_use]
pub fn rating_label(rating: Option<f64>, na: &str) -> String {
    rating.map_or_else(
        || na.to_string(),
        |value| format!("{:.1}", round_half_up(value, 10.0)),
    )
}

// `{:.N}` rounds exact ties to even; displayed figures round ties away from zero.
fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Render a 0-5 rating as filled and empty stars.
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(RATING_SCALE);
    let mut out = "★".repeat(usize::from(filled));
    out.push_str(&"☆".repeat(usize::from(RATING_SCALE - filled)));
    out
}

/// Render a backend timestamp as `dd/mm/yyyy`.
///
/// Accepts RFC 1123 (Flask's default), RFC 3339, and naive ISO forms; anything
/// else is returned unchanged, and a missing value renders as `-`.
#[must_use]
pub fn date_label(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return "-".to_string();
    };
    parse_date(raw).map_or_else(
        || raw.to_string(),
        |date| date.format("%d/%m/%Y").to_string(),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Join category names for inline display.
#[must_use]
pub fn join_categories(categories: &[String]) -> String {
    categories.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_render_in_gigabytes() {
        assert_eq!(size_label(1024.0), "1.00 GB");
        assert_eq!(size_label(1536.0), "1.50 GB");
        assert_eq!(size_label(0.0), "0.00 GB");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(size_label(128.0), "0.13 GB");
        assert_eq!(rating_label(Some(4.25), "N/A"), "4.3");
        assert_eq!(rating_label(Some(2.75), "N/A"), "2.8");
    }

    #[test]
    fn ratings_render_one_decimal_or_placeholder() {
        assert_eq!(rating_label(Some(4.26), "N/A"), "4.3");
        assert_eq!(rating_label(Some(3.0), "N/A"), "3.0");
        assert_eq!(rating_label(None, "N/A"), "N/A");
    }

    #[test]
    fn stars_fill_up_to_scale() {
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }

    #[test]
    fn dates_accept_backend_forms() {
        assert_eq!(
            date_label(Some("Tue, 15 Oct 2024 10:00:00 GMT")),
            "15/10/2024"
        );
        assert_eq!(date_label(Some("2024-10-15T10:00:00Z")), "15/10/2024");
        assert_eq!(date_label(Some("2024-10-15T10:00:00.123")), "15/10/2024");
        assert_eq!(date_label(Some("2024-10-15")), "15/10/2024");
    }

    #[test]
    fn unknown_dates_render_raw_or_dash() {
        assert_eq!(date_label(Some("yesterday")), "yesterday");
        assert_eq!(date_label(None), "-");
        assert_eq!(date_label(Some("  ")), "-");
    }

    #[test]
    fn categories_join_with_commas() {
        let categories = vec!["Film".to_string(), "Musica".to_string()];
        assert_eq!(join_categories(&categories), "Film, Musica");
        assert_eq!(join_categories(&[]), "");
    }
}
