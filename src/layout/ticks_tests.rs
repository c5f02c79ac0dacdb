use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_ticks(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

mod linear_tick_tests {
    use super::*;

    #[test]
    fn integer_steps() {
        assert_ticks(&linear_ticks(0.0, 20.0, 5), &[0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_ticks(
            &linear_ticks(0.0, 100.0, 5),
            &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        );
    }

    #[test]
    fn fractional_steps_are_exact() {
        assert_ticks(
            &linear_ticks(0.0, 1.0, 5),
            &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
        );
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let ticks = linear_ticks(3.0, 97.0, 5);
        assert!(ticks.iter().all(|t| (3.0..=97.0).contains(t)));
        assert_ticks(&ticks, &[20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn reversed_domain_is_ascending() {
        assert_ticks(&linear_ticks(20.0, 0.0, 5), &[0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn degenerate_inputs() {
        assert_ticks(&linear_ticks(4.0, 4.0, 5), &[4.0]);
        assert!(linear_ticks(0.0, 10.0, 0).is_empty());
        assert!(linear_ticks(f64::NAN, 10.0, 5).is_empty());
    }

    #[test]
    fn step_matches_tick_spacing() {
        assert!((tick_step(0.0, 100.0, 5) - 20.0).abs() < 1e-9);
        assert!((tick_step(0.0, 1.0, 5) - 0.2).abs() < 1e-9);
    }
}

mod format_tests {
    use super::*;

    #[test]
    fn integers_get_thousands_separators() {
        assert_eq!(format_linear_tick(0.0, 5.0), "0");
        assert_eq!(format_linear_tick(1500.0, 500.0), "1,500");
        assert_eq!(format_linear_tick(1_000_000.0, 200_000.0), "1,000,000");
    }

    #[test]
    fn fractional_steps_keep_decimals() {
        assert_eq!(format_linear_tick(0.2, 0.2), "0.2");
        assert_eq!(format_linear_tick(0.05, 0.05), "0.05");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_linear_tick(-1234.5, 0.5), "-1,234.5");
        assert_eq!(format_linear_tick(-0.0, 1.0), "0");
    }
}

mod time_tick_tests {
    use super::*;

    #[test]
    fn short_span_uses_days() {
        let ticks = time_ticks(date(2024, 1, 1), date(2024, 1, 5), 10);
        assert_eq!(ticks.len(), 5);
        assert_eq!(time_interval(date(2024, 1, 1), date(2024, 1, 5), 10), TimeInterval::Days(1));
    }

    #[test]
    fn half_year_uses_months() {
        let ticks = time_ticks(date(2024, 1, 1), date(2024, 6, 1), 10);
        assert_eq!(
            ticks,
            vec![
                date(2024, 1, 1),
                date(2024, 2, 1),
                date(2024, 3, 1),
                date(2024, 4, 1),
                date(2024, 5, 1),
                date(2024, 6, 1),
            ]
        );
    }

    #[test]
    fn two_years_use_quarters() {
        let ticks = time_ticks(date(2023, 1, 1), date(2024, 12, 31), 10);
        assert_eq!(ticks.len(), 8);
        assert!(ticks.iter().all(|d| d.day() == 1 && d.month0() % 3 == 0));
    }

    #[test]
    fn month_ticks_skip_partial_first_month() {
        let ticks = time_ticks(date(2024, 1, 15), date(2024, 6, 15), 10);
        assert_eq!(ticks.first(), Some(&date(2024, 2, 1)));
        assert_eq!(ticks.last(), Some(&date(2024, 6, 1)));
    }

    #[test]
    fn decades_use_multi_year_steps() {
        let interval = time_interval(date(2000, 1, 1), date(2030, 1, 1), 10);
        assert_eq!(interval, TimeInterval::Years(2));
        let ticks = time_ticks(date(2000, 1, 1), date(2030, 1, 1), 10);
        assert_eq!(ticks.len(), 16);
        assert!(ticks.iter().all(|d| d.year() % 2 == 0 && d.ordinal() == 1));
    }

    #[test]
    fn weekly_ticks_fall_on_sundays() {
        let ticks = time_ticks(date(2024, 1, 1), date(2024, 3, 1), 10);
        assert_eq!(time_interval(date(2024, 1, 1), date(2024, 3, 1), 10), TimeInterval::Weeks);
        assert!(ticks.iter().all(|d| d.weekday() == Weekday::Sun));
    }

    #[test]
    fn single_date_domain() {
        let ticks = time_ticks(date(2024, 3, 1), date(2024, 3, 1), 10);
        assert_eq!(ticks, vec![date(2024, 3, 1)]);
    }
}
