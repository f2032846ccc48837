/// Display formatting for raw stat values
///
/// Every cell the dashboard shows goes through `format_stat`. The rules are
/// keyed on the field name, first match wins:
///
/// 1. `minutes` - ISO-8601 duration fragment (`PT12M34.00S`) to `12:34 Min`
/// 2. `Percentage` / `_PCT` - fraction to one-decimal percent (`0.456` to `45.6%`)
/// 3. `played` - loose `== 1` to `Yes`, anything else `No`
/// 4. `SEASON_ID` - drop the leading season-type digit (`22022` to `2022`)
/// 5. everything else passes through (objects/arrays as compact JSON)
///
/// Formatting never fails: a value that does not fit its rule degrades to an
/// empty string or to its raw text.
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// Field holding the minutes played in a box-score line
pub const DURATION_FIELD: &str = "minutes";

/// Field holding the season identifier in stats payloads
pub const SEASON_ID_FIELD: &str = "SEASON_ID";

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(\d+)M(\d+\.\d+)S").expect("valid duration pattern"));

/// Format a raw stat value for display
pub fn format_stat(field: &str, raw: &Value) -> String {
    if field == DURATION_FIELD {
        return format_minutes(raw);
    }

    if is_percentage_field(field) {
        return format_percentage(raw);
    }

    if field.contains("played") {
        return if loosely_equals_one(raw) { "Yes" } else { "No" }.to_string();
    }

    if field == SEASON_ID_FIELD {
        if let Value::String(season) = raw {
            return season.chars().skip(1).collect();
        }
    }

    display_raw(raw)
}

/// Returns true if the field holds a fraction that should be shown as a percentage
pub fn is_percentage_field(field: &str) -> bool {
    field.contains("Percentage") || field.contains("_PCT")
}

/// Format an ISO-8601 duration fragment (`PT<m>M<s>.<f>S`) as `m:ss Min`
///
/// Seconds are rounded to the nearest whole second without carrying into
/// minutes, so `PT3M59.60S` renders `3:60 Min`.
pub fn format_minutes(raw: &Value) -> String {
    let Value::String(duration) = raw else {
        return String::new();
    };
    let Some(caps) = DURATION_RE.captures(duration) else {
        return String::new();
    };

    let minutes = caps[1].parse::<u64>();
    let seconds = caps[2].parse::<f64>();
    match (minutes, seconds) {
        (Ok(minutes), Ok(seconds)) => {
            format!("{}:{:02} Min", minutes, seconds.round() as u64)
        }
        _ => String::new(),
    }
}

/// Format a fraction as a percentage with one decimal place
///
/// No clamping: `1.25` renders `125.0%`.
pub fn format_percentage(raw: &Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::Number(n) => match n.as_f64() {
            Some(fraction) => percent_text(fraction),
            None => n.to_string(),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(fraction) if !s.trim().is_empty() => percent_text(fraction),
            _ => s.clone(),
        },
        other => display_raw(other),
    }
}

/// `fraction * 100` to one decimal, exact ties rounded away from zero
fn percent_text(fraction: f64) -> String {
    let percent = fraction * 100.0;
    let scaled = percent * 10.0;
    // Only a product with no rounding error is a real tie
    let exact_tie = scaled.fract().abs() == 0.5 && percent.mul_add(10.0, -scaled) == 0.0;
    let rounded = if exact_tie { scaled.round() / 10.0 } else { percent };
    // -0.0 prints as "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1}%", rounded)
}

/// Loose equality against 1: numbers, numeric strings and `true` all count
fn loosely_equals_one(raw: &Value) -> bool {
    match raw {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s.trim().parse::<f64>().map(|v| v == 1.0).unwrap_or(false),
        Value::Bool(b) => *b,
        _ => false,
    }
}

/// Render a value with no field-specific rule
pub fn display_raw(raw: &Value) -> String {
    match raw {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => raw.to_string(),
    }
}

/// Whole floats print without the trailing `.0` the JSON encoder adds
fn display_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(v) = n.as_f64() {
            if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
                return format!("{}", v as i64);
            }
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minutes_duration() {
        assert_eq!(format_stat("minutes", &json!("PT12M34.0S")), "12:34 Min");
        assert_eq!(format_stat("minutes", &json!("PT05M07.00S")), "5:07 Min");
        assert_eq!(format_stat("minutes", &json!("PT36M29.50S")), "36:30 Min");
    }

    #[test]
    fn test_minutes_rounding_does_not_carry() {
        assert_eq!(format_stat("minutes", &json!("PT3M59.60S")), "3:60 Min");
    }

    #[test]
    fn test_minutes_unparseable_is_blank() {
        assert_eq!(format_stat("minutes", &json!("not-a-duration")), "");
        assert_eq!(format_stat("minutes", &json!("PT12M34S")), "");
        assert_eq!(format_stat("minutes", &json!(34)), "");
        assert_eq!(format_stat("minutes", &Value::Null), "");
    }

    #[test]
    fn test_percentage_fields() {
        assert_eq!(format_stat("fieldGoalsPercentage", &json!(0.456)), "45.6%");
        assert_eq!(format_stat("FG_PCT", &json!(1)), "100.0%");
        assert_eq!(format_stat("FT_PCT", &json!(0.0)), "0.0%");
        assert_eq!(format_stat("FG3_PCT", &json!(0.5)), "50.0%");
        // Halves round up, not to even
        assert_eq!(format_stat("FG_PCT", &json!(0.0025)), "0.3%");
        assert_eq!(format_stat("FG_PCT", &json!(0.0075)), "0.8%");
        assert_eq!(format_stat("FG_PCT", &json!(-0.0)), "0.0%");
    }

    #[test]
    fn test_percentage_is_not_clamped() {
        assert_eq!(format_stat("FG_PCT", &json!(1.25)), "125.0%");
        assert_eq!(format_stat("FG_PCT", &json!(-0.1)), "-10.0%");
    }

    #[test]
    fn test_percentage_degrades() {
        assert_eq!(format_stat("FG_PCT", &Value::Null), "");
        assert_eq!(format_stat("FG_PCT", &json!("0.25")), "25.0%");
        assert_eq!(format_stat("FG_PCT", &json!("n/a")), "n/a");
    }

    #[test]
    fn test_played_flag() {
        assert_eq!(format_stat("played", &json!(1)), "Yes");
        assert_eq!(format_stat("played", &json!(0)), "No");
        assert_eq!(format_stat("played", &json!("1")), "Yes");
        assert_eq!(format_stat("played", &json!(1.0)), "Yes");
        assert_eq!(format_stat("played", &json!("yes")), "No");
        assert_eq!(format_stat("played", &Value::Null), "No");
    }

    #[test]
    fn test_season_id_drops_type_digit() {
        assert_eq!(format_stat("SEASON_ID", &json!("22022")), "2022");
        assert_eq!(format_stat("SEASON_ID", &json!("")), "");
        // Only strings are trimmed
        assert_eq!(format_stat("SEASON_ID", &json!(22022)), "22022");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(format_stat("points", &json!(27)), "27");
        assert_eq!(format_stat("PTS", &json!(1234567)), "1234567");
        assert_eq!(format_stat("MIN", &json!(34.5)), "34.5");
        assert_eq!(format_stat("MIN", &json!(36.0)), "36");
        assert_eq!(format_stat("MATCHUP", &json!("LAL vs. BOS")), "LAL vs. BOS");
        assert_eq!(format_stat("GAME_DATE", &Value::Null), "");
    }

    #[test]
    fn test_structured_values_render_as_json() {
        assert_eq!(
            format_stat("name", &json!({"first": "A", "last": "B"})),
            r#"{"first":"A","last":"B"}"#
        );
        assert_eq!(format_stat("tags", &json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_rule_precedence() {
        // "minutes" wins even though nothing else would match
        assert_eq!(format_stat("minutes", &json!(0.5)), "");
        // a percentage field containing "played" is formatted as a percentage
        assert_eq!(format_stat("playedPercentage", &json!(0.5)), "50.0%");
    }
}
