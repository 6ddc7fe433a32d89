//! Date parser for the quick-add form.
//!
//! Supports:
//! - empty input: today
//! - `today` / `tomorrow`
//! - relative: `+3d`
//! - ISO: `2026-08-07`

use chrono::{Days, NaiveDate};

/// Error type for date parsing failures.
#[derive(Debug, Clone)]
pub struct DateParseError {
    pub input: String,
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unrecognized date '{}'. Use YYYY-MM-DD, today, tomorrow, or +Nd",
            self.input
        )
    }
}

impl std::error::Error for DateParseError {}

/// Parses a quick-add date expression relative to `today`.
///
/// Empty input means today, so the form can submit with a blank date field.
pub fn parse_visit_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let input = input.trim();

    if input.is_empty() || input.eq_ignore_ascii_case("today") {
        return Ok(today);
    }

    if input.eq_ignore_ascii_case("tomorrow") {
        return today.checked_add_days(Days::new(1)).ok_or(DateParseError {
            input: input.to_string(),
        });
    }

    if let Some(days) = try_parse_relative_days(input) {
        return today.checked_add_days(Days::new(days)).ok_or(DateParseError {
            input: input.to_string(),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(DateParseError {
        input: input.to_string(),
    })
}

/// Parses `+Nd` into a day count.
fn try_parse_relative_days(input: &str) -> Option<u64> {
    let rest = input.strip_prefix('+')?;
    let digits = rest.strip_suffix('d').or_else(|| rest.strip_suffix('D'))?;
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn empty_and_today_mean_today() {
        assert_eq!(parse_visit_date("", today()).unwrap(), today());
        assert_eq!(parse_visit_date("  ", today()).unwrap(), today());
        assert_eq!(parse_visit_date("Today", today()).unwrap(), today());
    }

    #[test]
    fn tomorrow_and_relative_days() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(parse_visit_date("tomorrow", today()).unwrap(), expected);
        assert_eq!(parse_visit_date("+1d", today()).unwrap(), expected);
        assert_eq!(
            parse_visit_date("+14d", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 21).unwrap()
        );
    }

    #[test]
    fn iso_dates_parse() {
        assert_eq!(
            parse_visit_date("2026-09-01", today()).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
    }

    #[test]
    fn garbage_is_rejected_with_the_input_in_the_message() {
        let err = parse_visit_date("next tuesday", today()).unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
    }
}
