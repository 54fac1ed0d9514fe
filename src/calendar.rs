//! Holiday observance rules for rental billing.
//! Only the two holidays that affect rental charges are modelled:
//! Independence Day, which moves to the nearest weekday when July 4 falls
//! on a weekend, and Labor Day, the first Monday of September.

use chrono::{Datelike, NaiveDate, Weekday};

/// Holidays recognized by the rental charge rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    IndependenceDay,
    LaborDay,
}

/// Classify a date as an observed holiday, if it is one.
/// At most one holiday is observed on any given date.
pub fn observed_holiday(date: NaiveDate) -> Option<Holiday> {
    if is_independence_day_observed(date) {
        Some(Holiday::IndependenceDay)
    } else if is_labor_day_observed(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

/// Check whether Independence Day is observed on the given date.
/// July 4 itself counts when it is a weekday. When July 4 falls on a
/// Saturday the preceding Friday (July 3) is observed instead, and when
/// it falls on a Sunday the following Monday (July 5). Exactly one day
/// is observed each year.
pub fn is_independence_day_observed(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }
    match (date.day(), date.weekday()) {
        // July 4 on a weekday
        (4, weekday) => weekday != Weekday::Sat && weekday != Weekday::Sun,
        // Friday July 3, so July 4 is a Saturday
        (3, Weekday::Fri) => true,
        // Monday July 5, so July 4 is a Sunday
        (5, Weekday::Mon) => true,
        _ => false,
    }
}

/// Check whether the given date is Labor Day, the first Monday of
/// September. The first Monday always has a day of month in 1..=7.
pub fn is_labor_day_observed(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}

/// Check for Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    let weekday = date.weekday();
    weekday == Weekday::Sat || weekday == Weekday::Sun
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn independence_day_on_a_weekday() {
        // July 4th 2023 is a Tuesday
        assert_eq!(observed_holiday(date(2023, 7, 4)), Some(Holiday::IndependenceDay));
        assert_eq!(observed_holiday(date(2023, 7, 3)), None);
        assert_eq!(observed_holiday(date(2023, 7, 5)), None);
    }

    #[test]
    fn independence_day_on_saturday_moves_to_friday() {
        // July 4th 2015 and 2020 are Saturdays
        for year in &[2015, 2020] {
            assert!(is_independence_day_observed(date(*year, 7, 3)));
            assert!(!is_independence_day_observed(date(*year, 7, 4)));
            assert!(!is_independence_day_observed(date(*year, 7, 6)));
        }
    }

    #[test]
    fn independence_day_on_sunday_moves_to_monday() {
        // July 4th 2021 is a Sunday
        assert!(is_independence_day_observed(date(2021, 7, 5)));
        assert!(!is_independence_day_observed(date(2021, 7, 4)));
        assert!(!is_independence_day_observed(date(2021, 7, 2)));
    }

    #[test]
    fn exactly_one_observed_independence_day_per_year() {
        for year in 2014..=2030 {
            let mut observed = 0;
            let mut day = date(year, 7, 1);
            while day.month() == 7 {
                if is_independence_day_observed(day) {
                    observed += 1;
                }
                day = day + Duration::days(1);
            }
            assert_eq!(observed, 1, "year {}", year);
        }
    }

    #[test]
    fn labor_day_is_first_monday_of_september() {
        assert_eq!(observed_holiday(date(2015, 9, 7)), Some(Holiday::LaborDay));
        assert_eq!(observed_holiday(date(2020, 9, 7)), Some(Holiday::LaborDay));
        assert_eq!(observed_holiday(date(2021, 9, 6)), Some(Holiday::LaborDay));
        // second Monday
        assert_eq!(observed_holiday(date(2015, 9, 14)), None);
        // a Monday, but in October
        assert_eq!(observed_holiday(date(2015, 10, 5)), None);
        // first of September on a non-Monday
        assert_eq!(observed_holiday(date(2015, 9, 1)), None);
    }

    #[test]
    fn weekend_check() {
        assert!(is_weekend(date(2023, 7, 1)));
        assert!(is_weekend(date(2023, 7, 2)));
        assert!(!is_weekend(date(2023, 7, 3)));
        assert!(!is_weekend(date(2023, 7, 7)));
    }
}
