// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

//! How dates and times are shown to people, as `Intl` locale options.

/// The value of one `Intl.DateTimeFormat` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatValue {
    /// A string option such as `"numeric"`.
    Text(&'static str),
    /// A boolean option such as `hour12`.
    Flag(bool),
}

/// A locale and the options passed along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    /// BCP 47 tag.
    pub locale: &'static str,
    /// Option names and values, in the order they are set.
    pub options: &'static [(&'static str, FormatValue)],
}

/// "January 5, 2026".
pub const DATE_FORMAT: LocaleFormat = LocaleFormat {
    locale: "en-US",
    options: &[
        ("year", FormatValue::Text("numeric")),
        ("month", FormatValue::Text("long")),
        ("day", FormatValue::Text("numeric")),
    ],
};

/// "2:05 PM".
pub const TIME_FORMAT: LocaleFormat = LocaleFormat {
    locale: "en-US",
    options: &[
        ("hour", FormatValue::Text("numeric")),
        ("minute", FormatValue::Text("2-digit")),
        ("hour12", FormatValue::Flag(true)),
    ],
};

/// Turns a time of day as the server renders it (`14:05` or `14:05:30`) into a
/// date-time string `Date` can parse.
///
/// The date part is arbitrary; only the time is ever formatted.
pub fn time_of_day(time: &str) -> String {
    format!("2000-01-01T{}", time.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_anchored_to_a_fixed_day() {
        assert_eq!(time_of_day("14:05"), "2000-01-01T14:05");
        assert_eq!(time_of_day(" 08:30:15 "), "2000-01-01T08:30:15");
    }

    #[test]
    fn times_use_a_twelve_hour_clock() {
        assert!(
            TIME_FORMAT
                .options
                .contains(&("hour12", FormatValue::Flag(true)))
        );
        assert_eq!(DATE_FORMAT.locale, TIME_FORMAT.locale);
        assert_eq!(DATE_FORMAT.options[1], ("month", FormatValue::Text("long")));
    }
}
