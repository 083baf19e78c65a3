//! Property tests for the leave duration calculator.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use leave_engine::calculation::{calculate_leave, compute_leave};
use leave_engine::calendar::WorkCalendar;
use leave_engine::models::{DayDisposition, DayType, HolidaySet, LeaveComputationInput};

fn any_day_type() -> impl Strategy<Value = DayType> {
    prop_oneof![
        Just(DayType::FullDay),
        Just(DayType::HalfDay),
        Just(DayType::OnOff),
    ]
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2020-01-01 .. roughly 2030
    (0_i64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn any_holidays() -> impl Strategy<Value = HolidaySet> {
    proptest::collection::vec(any_date(), 0..40).prop_map(|dates| dates.into_iter().collect())
}

proptest! {
    #[test]
    fn same_input_gives_same_result(
        start in any_date(),
        units in 1_i64..60,
        day_type in any_day_type(),
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, day_type);
        prop_assert_eq!(compute_leave(&input, &holidays), compute_leave(&input, &holidays));
    }

    #[test]
    fn non_positive_units_give_empty_result(
        start in any_date(),
        units in -100_i64..=0,
        day_type in any_day_type(),
    ) {
        let input = LeaveComputationInput::new(start, units, day_type);
        let result = compute_leave(&input, &HolidaySet::new());

        prop_assert!(result.is_empty());
        prop_assert_eq!(result.end_date, None);
        prop_assert_eq!(result.return_date, None);
        prop_assert_eq!(result.chargeable_days, Decimal::ZERO);
    }

    #[test]
    fn full_day_spans_exactly_units_working_days(
        start in any_date(),
        units in 1_i64..60,
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, DayType::FullDay);
        let result = compute_leave(&input, &holidays);
        let calendar = WorkCalendar::new(&holidays);
        let end = result.end_date.unwrap();

        prop_assert!(!calendar.is_non_working_day(end));
        prop_assert_eq!(calendar.working_days_between(start, end), units as usize);
        prop_assert_eq!(result.chargeable_days, Decimal::from(units));
    }

    #[test]
    fn half_day_spans_consecutive_calendar_days(
        start in any_date(),
        units in 1_i64..60,
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, DayType::HalfDay);
        let result = compute_leave(&input, &holidays);
        let end = result.end_date.unwrap();

        prop_assert_eq!((end - start).num_days(), units - 1);
        prop_assert_eq!(result.chargeable_days, Decimal::from(units) * Decimal::new(5, 1));
    }

    #[test]
    fn on_off_charges_only_working_days(
        start in any_date(),
        units in 1_i64..60,
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, DayType::OnOff);
        let calculation = calculate_leave(&input, &holidays);
        let calendar = WorkCalendar::new(&holidays);

        prop_assert_eq!(calculation.charged_day_count(), units as usize);
        for day in &calculation.days {
            let working = !calendar.is_non_working_day(day.date);
            prop_assert_eq!(day.disposition == DayDisposition::Charged, working);
        }
    }

    #[test]
    fn return_date_is_next_working_day_after_end(
        start in any_date(),
        units in 1_i64..60,
        day_type in any_day_type(),
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, day_type);
        let result = compute_leave(&input, &holidays);
        let calendar = WorkCalendar::new(&holidays);
        let end = result.end_date.unwrap();
        let return_date = result.return_date.unwrap();

        prop_assert!(return_date > end);
        prop_assert!(!calendar.is_non_working_day(return_date));
        for date in calendar.days_from(end.succ_opt().unwrap()).take_while(|d| *d < return_date) {
            prop_assert!(calendar.is_non_working_day(date));
        }
    }

    #[test]
    fn breakdown_charges_sum_to_chargeable_days(
        start in any_date(),
        units in 1_i64..60,
        day_type in any_day_type(),
        holidays in any_holidays(),
    ) {
        let input = LeaveComputationInput::new(start, units, day_type);
        let calculation = calculate_leave(&input, &holidays);
        let total: Decimal = calculation.days.iter().map(|d| d.charge).sum();

        prop_assert_eq!(total, calculation.result.chargeable_days);
        prop_assert_eq!(calculation.days.first().map(|d| d.date), Some(start));
        prop_assert_eq!(calculation.days.last().map(|d| d.date), calculation.result.end_date);
    }

    #[test]
    fn weekends_are_never_charged_for_full_day(
        start in any_date(),
        units in 1_i64..30,
    ) {
        let input = LeaveComputationInput::new(start, units, DayType::FullDay);
        let calculation = calculate_leave(&input, &HolidaySet::new());

        for day in calculation.days.iter().filter(|d| d.date.weekday().number_from_monday() > 5) {
            prop_assert_eq!(day.disposition, DayDisposition::Weekend);
        }
    }
}
