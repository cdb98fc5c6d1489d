//! Race-time normalization.
//!
//! The raw `time` column of the results dataset mixes several textual
//! shapes: minutes-and-seconds (`"1min 20.456s"`), suffixed seconds
//! (`"45.2s"`), bare numbers (`"290.456"`), and assorted text that is not a
//! time at all (`"DNF"`). Normalization classifies a value into exactly one
//! recognized shape and parses it into canonical seconds, or reports it as
//! unparseable so the cleaning stage can drop the row.

/// The recognized textual shapes of a raw race-time value, in the order
/// they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeShape {
    /// Contains `"min"`: minutes and seconds, e.g. `"1min 20.456s"`.
    MinutesSeconds,
    /// Contains `"s"` (and no `"min"`): suffixed seconds, e.g. `"45.2s"`.
    SecondsSuffix,
    /// Anything else: a bare number already in seconds, e.g. `"290.456"`.
    BareNumber,
}

/// Classify a raw value into the shape it will be parsed as.
///
/// Classification is by substring only and is case-sensitive. A value is
/// committed to its shape: if the shape then fails to parse, the value is
/// unparseable; it never falls through to a later shape.
pub fn classify(raw: &str) -> TimeShape {
    if raw.contains("min") {
        TimeShape::MinutesSeconds
    } else if raw.contains('s') {
        TimeShape::SecondsSuffix
    } else {
        TimeShape::BareNumber
    }
}

/// Parse a raw race-time value into canonical seconds.
///
/// Returns `None` for any value that does not parse under its classified
/// shape. Plain numeric text round-trips unchanged, so normalization is
/// idempotent over already-canonical values.
///
/// # Examples
///
/// ```
/// use insights_core::race_time::parse_seconds;
///
/// assert!((parse_seconds("1min 20.456s").unwrap() - 80.456).abs() < 1e-9);
/// assert!((parse_seconds("45.2s").unwrap() - 45.2).abs() < 1e-9);
/// assert!((parse_seconds("290.456").unwrap() - 290.456).abs() < 1e-9);
/// assert_eq!(parse_seconds("DNF"), None);
/// ```
pub fn parse_seconds(raw: &str) -> Option<f64> {
    let value = match classify(raw) {
        TimeShape::MinutesSeconds => {
            let (minutes, rest) = raw.split_once("min")?;
            let minutes: f64 = minutes.trim().parse().ok()?;
            let seconds = parse_suffixed_seconds(rest)?;
            minutes * 60.0 + seconds
        }
        TimeShape::SecondsSuffix => parse_suffixed_seconds(raw)?,
        TimeShape::BareNumber => raw.trim().parse().ok()?,
    };
    // "nan" parses as a float but is not a usable time.
    if value.is_nan() {
        return None;
    }
    Some(value)
}

/// Parse a seconds fragment: trim whitespace, drop one trailing `s`, parse.
fn parse_suffixed_seconds(fragment: &str) -> Option<f64> {
    let trimmed = fragment.trim();
    let trimmed = trimmed.strip_suffix('s').unwrap_or(trimmed);
    trimmed.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: Option<f64>, expected: f64) -> bool {
        matches!(actual, Some(v) if (v - expected).abs() < 1e-9)
    }

    // ── shape classification ───────────────────────────────────────────────

    #[test]
    fn test_classify_minutes_wins_over_seconds() {
        // "1min 20.456s" contains both markers; "min" takes priority.
        assert_eq!(classify("1min 20.456s"), TimeShape::MinutesSeconds);
    }

    #[test]
    fn test_classify_seconds_suffix() {
        assert_eq!(classify("45.2s"), TimeShape::SecondsSuffix);
    }

    #[test]
    fn test_classify_bare_number() {
        assert_eq!(classify("290.456"), TimeShape::BareNumber);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Uppercase "S" is not a seconds marker.
        assert_eq!(classify("45.2S"), TimeShape::BareNumber);
    }

    // ── minutes and seconds ────────────────────────────────────────────────

    #[test]
    fn test_parse_minutes_and_seconds() {
        assert!(close(parse_seconds("1min 20.456s"), 80.456));
    }

    #[test]
    fn test_parse_minutes_without_seconds_suffix() {
        assert!(close(parse_seconds("2min 5"), 125.0));
    }

    #[test]
    fn test_parse_minutes_with_bad_seconds() {
        assert_eq!(parse_seconds("1min xs"), None);
    }

    #[test]
    fn test_parse_minutes_with_empty_seconds() {
        assert_eq!(parse_seconds("2min"), None);
    }

    #[test]
    fn test_parse_repeated_min_marker() {
        assert_eq!(parse_seconds("1min 2min 3s"), None);
    }

    // ── suffixed seconds ───────────────────────────────────────────────────

    #[test]
    fn test_parse_suffixed_seconds_value() {
        assert!(close(parse_seconds("45.2s"), 45.2));
    }

    #[test]
    fn test_parse_suffixed_seconds_with_whitespace() {
        assert!(close(parse_seconds("  45.2s  "), 45.2));
    }

    #[test]
    fn test_parse_suffix_shape_with_garbage() {
        // Classified as SecondsSuffix because of the 's'; the parse then
        // fails and the value is unparseable, with no bare-number retry.
        assert_eq!(parse_seconds("worst"), None);
    }

    // ── bare numbers ───────────────────────────────────────────────────────

    #[test]
    fn test_parse_bare_number_identity() {
        assert!(close(parse_seconds("290.456"), 290.456));
    }

    #[test]
    fn test_parse_bare_integer() {
        assert!(close(parse_seconds("45"), 45.0));
    }

    #[test]
    fn test_parse_bare_number_with_whitespace() {
        assert!(close(parse_seconds("  80.456  "), 80.456));
    }

    #[test]
    fn test_parse_signed_number() {
        assert!(close(parse_seconds("+5.478"), 5.478));
    }

    // ── unparseable values ─────────────────────────────────────────────────

    #[test]
    fn test_parse_dnf_is_unparseable() {
        assert_eq!(parse_seconds("DNF"), None);
    }

    #[test]
    fn test_parse_clock_shape_is_unparseable() {
        // The display shape "h:mm:ss.fff" is not a recognized input shape.
        assert_eq!(parse_seconds("1:34:50.616"), None);
    }

    #[test]
    fn test_parse_empty_is_unparseable() {
        assert_eq!(parse_seconds(""), None);
    }

    #[test]
    fn test_parse_nan_text_is_unparseable() {
        assert_eq!(parse_seconds("nan"), None);
    }
}
