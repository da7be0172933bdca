use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::StatsError;

static BEGIN_HOUR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(1[0-2]|0?[1-9])(?:[Aa][Mm])").ok());
static END_HOUR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(1[0-2]|0?[1-9])(?:[Pp][Mm])").ok());

/// Added to every PM hour, including "12PM" which becomes 24.
const END_HOUR_OFFSET: u32 = 12;

/// An hour found in a delivery window, e.g. `10AM` with `hour == 10`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HourToken<'a> {
    pub token: &'a str,
    pub hour: u32,
}

/// Find the first `<hour>AM` token anywhere in `text`.
///
/// # Errors
/// Returns [`StatsError::BeginHourNotFound`] when no AM hour is present.
pub fn extract_begin_hour(text: &str) -> Result<HourToken<'_>, StatsError> {
    extract_hour((*BEGIN_HOUR).as_ref(), text, StatsError::BeginHourNotFound)
}

/// Find the first `<hour>PM` token anywhere in `text`.
///
/// # Errors
/// Returns [`StatsError::EndHourNotFound`] when no PM hour is present.
pub fn extract_end_hour(text: &str) -> Result<HourToken<'_>, StatsError> {
    extract_hour((*END_HOUR).as_ref(), text, StatsError::EndHourNotFound)
}

fn extract_hour<'a>(
    pattern: Option<&Regex>,
    text: &'a str,
    not_found: fn(String) -> StatsError,
) -> Result<HourToken<'a>, StatsError> {
    let Some(captures) = pattern.and_then(|re| re.captures(text)) else {
        return Err(not_found(text.to_string()));
    };
    let (Some(token), Some(digits)) = (captures.get(0), captures.get(1)) else {
        return Err(not_found(text.to_string()));
    };

    let hour = digits
        .as_str()
        .parse::<u32>()
        .map_err(|err| StatsError::InvalidHour(format!("{}: {err}", digits.as_str())))?;

    Ok(HourToken { token: token.as_str(), hour })
}

/// Comparable begin/end hours of a `"{H}AM - {H}PM"` range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimeWindow {
    pub begin: u32,
    pub end: u32,
}

impl TimeWindow {
    /// Parse the begin and end hours with two independent searches over `text`.
    ///
    /// # Errors
    /// Returns the parser error of whichever hour could not be found.
    pub fn parse(text: &str) -> Result<Self, StatsError> {
        let begin = extract_begin_hour(text)?.hour;
        let end = extract_end_hour(text)?.hour + END_HOUR_OFFSET;
        Ok(Self { begin, end })
    }

    /// True when `delivery` begins no later than this window begins and ends no
    /// later than this window ends.
    #[must_use]
    pub fn accepts(&self, delivery: &TimeWindow) -> bool {
        delivery.begin <= self.begin && delivery.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(text: &str) -> TimeWindow {
        match TimeWindow::parse(text) {
            Ok(window) => window,
            Err(err) => panic!("failed to parse fixture window {text:?}: {err}"),
        }
    }

    #[test]
    fn begin_hour_returns_matched_token_and_value() {
        let token = extract_begin_hour("10AM - 3PM");
        assert_eq!(token, Ok(HourToken { token: "10AM", hour: 10 }));
    }

    #[test]
    fn end_hour_returns_matched_token_and_value() {
        let token = extract_end_hour("10AM - 3PM");
        assert_eq!(token, Ok(HourToken { token: "3PM", hour: 3 }));
    }

    #[test]
    fn suffix_is_case_insensitive() {
        assert_eq!(extract_begin_hour("Monday 7am - 9pM"), Ok(HourToken { token: "7am", hour: 7 }));
        assert_eq!(extract_end_hour("Monday 7am - 9pM"), Ok(HourToken { token: "9pM", hour: 9 }));
    }

    #[test]
    fn leading_zero_hours_are_accepted() {
        assert_eq!(extract_begin_hour("09AM - 05PM"), Ok(HourToken { token: "09AM", hour: 9 }));
    }

    #[test]
    fn missing_tokens_report_not_found() {
        assert_eq!(extract_begin_hour(""), Err(StatsError::BeginHourNotFound(String::new())));
        assert_eq!(
            extract_end_hour("ZAMBAS"),
            Err(StatsError::EndHourNotFound("ZAMBAS".to_string()))
        );
        assert_eq!(
            extract_end_hour("10AM - 3"),
            Err(StatsError::EndHourNotFound("10AM - 3".to_string()))
        );
    }

    #[test]
    fn tokens_are_searched_independently_of_order() {
        let window = window("3PM - 10AM");
        assert_eq!(window, TimeWindow { begin: 10, end: 15 });
    }

    #[test]
    fn hours_do_not_need_a_spaced_separator() {
        assert_eq!(window("10AM-3PM"), TimeWindow { begin: 10, end: 15 });
        assert_eq!(extract_end_hour("10AM-3PM"), Ok(HourToken { token: "3PM", hour: 3 }));
    }

    // 12PM is shifted like every other PM hour.
    #[test]
    fn twelve_pm_is_shifted_to_twenty_four() {
        assert_eq!(window("Friday 12AM - 12PM"), TimeWindow { begin: 12, end: 24 });
    }

    #[test]
    fn window_accepts_deliveries_starting_and_ending_no_later() {
        let filter = window("10AM - 3PM");

        assert!(filter.accepts(&window("10AM - 2PM")));
        assert!(filter.accepts(&window("10AM - 3PM")));
        assert!(filter.accepts(&window("9AM - 2PM")));
        assert!(!filter.accepts(&window("11AM - 2PM")));
        assert!(!filter.accepts(&window("10AM - 4PM")));
        assert!(!window("9AM - 2PM").accepts(&window("10AM - 2PM")));
    }
}
