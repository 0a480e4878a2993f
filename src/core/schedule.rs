//! The alternating big/small week calculator.
//!
//! Weeks run Monday through Sunday. Week 0 is the week starting at the
//! reference Monday and is a double-rest week (Saturday and Sunday off);
//! week parity alternates from there in both directions, so odd weeks are
//! single-rest weeks (Sunday off only).
//!
//! Everything here is a pure function of its date arguments. Validation of
//! the reference (is it actually a Monday?) belongs to the settings layer;
//! if a non-Monday slips through, `monday_of` silently snaps it to its
//! week's Monday.

use crate::domain::model::{RestDay, WeekParity, WeekType};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Monday of the calendar week containing `date`.
///
/// Sunday counts as the last day of its week, so a Sunday maps to the
/// Monday six days earlier, not the Monday one day later.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date - Days::new(offset)
}

/// Parity of `date`'s week relative to the reference week.
///
/// Floor division keeps the alternation correct for dates before the
/// reference (week -1 is a single-rest week, week -2 double-rest, and so
/// on); `rem_euclid` keeps the result in {0, 1} for negative week counts.
pub fn week_parity(date: NaiveDate, reference_monday: NaiveDate) -> WeekParity {
    let days_diff = (monday_of(date) - monday_of(reference_monday)).num_days();
    let weeks_diff = days_diff.div_euclid(7);
    weeks_diff.rem_euclid(2) as WeekParity
}

/// Classify a date as a workday or one of the two kinds of rest day.
pub fn classify(date: NaiveDate, reference_monday: NaiveDate) -> RestDay {
    let parity = week_parity(date, reference_monday);
    match (parity, date.weekday()) {
        (0, Weekday::Sat) | (0, Weekday::Sun) => RestDay::DoubleRest,
        (1, Weekday::Sun) => RestDay::SingleRest,
        _ => RestDay::WorkDay,
    }
}

/// Which kind of week `date` falls in, for display.
pub fn week_type(date: NaiveDate, reference_monday: NaiveDate) -> WeekType {
    if week_parity(date, reference_monday) == 0 {
        WeekType::DoubleRest
    } else {
        WeekType::SingleRest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn reference() -> NaiveDate {
        // A Monday, starting a double-rest week.
        date(2024, 12, 16)
    }

    #[test]
    fn monday_of_is_identity_on_mondays() {
        assert_eq!(monday_of(reference()), reference());
    }

    #[test]
    fn monday_of_is_idempotent() {
        let mut day = date(2024, 1, 1);
        for _ in 0..400 {
            assert_eq!(monday_of(monday_of(day)), monday_of(day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday() {
        // 2024-12-22 is a Sunday; its week starts on 2024-12-16.
        let sunday = date(2024, 12, 22);
        assert_eq!(monday_of(sunday), date(2024, 12, 16));
        assert_eq!(monday_of(sunday), monday_of(sunday - Days::new(6)));
    }

    #[test]
    fn reference_week_has_parity_zero() {
        assert_eq!(week_parity(reference(), reference()), 0);
        // Every day of the reference week, Sunday included.
        for offset in 0..7 {
            let day = reference() + Days::new(offset);
            assert_eq!(week_parity(day, reference()), 0, "day offset {offset}");
        }
    }

    #[test]
    fn parity_is_periodic_with_fourteen_days() {
        let mut day = date(2023, 6, 1);
        for _ in 0..500 {
            assert_eq!(
                week_parity(day, reference()),
                week_parity(day + Days::new(14), reference()),
                "at {day}"
            );
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn parity_is_constant_within_a_week_and_flips_at_the_boundary() {
        let mut monday = date(2024, 1, 1); // a Monday
        for _ in 0..60 {
            let parity = week_parity(monday, reference());
            for offset in 1..7 {
                assert_eq!(week_parity(monday + Days::new(offset), reference()), parity);
            }
            let next_monday = monday + Days::new(7);
            assert_eq!(week_parity(next_monday, reference()), 1 - parity);
            monday = next_monday;
        }
    }

    #[test]
    fn weeks_before_the_reference_alternate_too() {
        // Week -1 (2024-12-09..15) is single-rest, week -2 double-rest.
        assert_eq!(week_parity(date(2024, 12, 9), reference()), 1);
        assert_eq!(week_parity(date(2024, 12, 15), reference()), 1);
        assert_eq!(week_parity(date(2024, 12, 2), reference()), 0);
        assert_eq!(classify(date(2024, 12, 15), reference()), RestDay::SingleRest);
        assert_eq!(classify(date(2024, 12, 14), reference()), RestDay::WorkDay);
        assert_eq!(classify(date(2024, 12, 7), reference()), RestDay::DoubleRest);
    }

    #[test]
    fn reference_monday_itself_is_a_workday() {
        assert_eq!(classify(reference(), reference()), RestDay::WorkDay);
    }

    #[test]
    fn double_rest_week_rests_saturday_and_sunday() {
        // Saturday and Sunday of the reference week.
        assert_eq!(classify(date(2024, 12, 21), reference()), RestDay::DoubleRest);
        assert_eq!(classify(date(2024, 12, 22), reference()), RestDay::DoubleRest);
        // Friday is still a workday.
        assert_eq!(classify(date(2024, 12, 20), reference()), RestDay::WorkDay);
    }

    #[test]
    fn single_rest_week_rests_sunday_only() {
        // Week 1 starts 2024-12-23.
        assert_eq!(classify(date(2024, 12, 23), reference()), RestDay::WorkDay);
        assert_eq!(classify(date(2024, 12, 28), reference()), RestDay::WorkDay); // Saturday
        assert_eq!(classify(date(2024, 12, 29), reference()), RestDay::SingleRest); // Sunday
    }

    #[test]
    fn week_type_labels_alternate() {
        assert_eq!(week_type(date(2024, 12, 21), reference()), WeekType::DoubleRest);
        assert_eq!(week_type(date(2024, 12, 28), reference()), WeekType::SingleRest);
        assert_eq!(
            week_type(date(2024, 12, 21), reference()).label(),
            "double-rest week (Sat+Sun off)"
        );
        assert_eq!(
            week_type(date(2024, 12, 28), reference()).label(),
            "single-rest week (Sun off)"
        );
    }

    #[test]
    fn non_monday_reference_is_normalized() {
        // A Wednesday reference behaves like the Monday of its week.
        let wednesday = date(2024, 12, 18);
        let mut day = date(2024, 11, 1);
        for _ in 0..90 {
            assert_eq!(classify(day, wednesday), classify(day, reference()), "at {day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn no_week_has_more_rest_days_than_its_type_allows() {
        let mut monday = date(2024, 6, 3); // a Monday
        for _ in 0..20 {
            let rest_days = (0..7)
                .filter(|&offset| classify(monday + Days::new(offset), reference()).is_rest())
                .count();
            let expected = if week_parity(monday, reference()) == 0 { 2 } else { 1 };
            assert_eq!(rest_days, expected, "week of {monday}");
            monday = monday + Days::new(7);
        }
    }
}
