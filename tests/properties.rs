//! 예측 계산의 성질 검증 (proptest).
use proptest::prelude::*;
use vle_anticipation::projection::{project_daily_average, ProjectionError, ProjectionInput};
use vle_anticipation::time_split::TimeSplit;

fn input(limit: f64, hour: f64, measured: f64, proposed: f64) -> ProjectionInput {
    ProjectionInput {
        limit_mg_m3: limit,
        split: TimeSplit::at_hour(hour).expect("valid hour"),
        measured_average_mg_m3: measured,
        proposed_mg_m3: proposed,
    }
}

proptest! {
    #[test]
    fn split_always_sums_to_a_day(hour in 0.0f64..=24.0) {
        let split = TimeSplit::at_hour(hour).unwrap();
        prop_assert_eq!(split.elapsed_hours() + split.remaining_hours(), 24.0);
    }

    #[test]
    fn clock_split_sums_to_a_day(h in 0u32..24, m in 0u32..60) {
        let split = TimeSplit::from_clock(h, m).unwrap();
        prop_assert_eq!(split.elapsed_hours() + split.remaining_hours(), 24.0);
        prop_assert!(split.remaining_hours() > 0.0);
    }

    #[test]
    fn projection_is_deterministic(
        limit in 0.0f64..500.0,
        hour in 0.0f64..24.0,
        measured in 0.0f64..300.0,
        proposed in 0.0f64..300.0,
    ) {
        let a = project_daily_average(input(limit, hour, measured, proposed));
        let b = project_daily_average(input(limit, hour, measured, proposed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn equal_segments_project_their_common_value(
        hour in 0.0f64..24.0,
        value in 0.0f64..300.0,
    ) {
        let res = project_daily_average(input(50.0, hour, value, value)).unwrap();
        prop_assert!((res.projected_average_mg_m3 - value).abs() <= 1e-9 * value.max(1.0));
    }

    #[test]
    fn projection_rises_with_proposed(
        hour in 0.0f64..23.5,
        measured in 0.0f64..300.0,
        proposed in 0.0f64..300.0,
        step in 0.01f64..50.0,
    ) {
        let low = project_daily_average(input(50.0, hour, measured, proposed)).unwrap();
        let high = project_daily_average(input(50.0, hour, measured, proposed + step)).unwrap();
        prop_assert!(high.projected_average_mg_m3 > low.projected_average_mg_m3);
    }

    #[test]
    fn running_at_ceiling_lands_on_limit(
        limit in 1.0f64..200.0,
        hour in 0.0f64..23.0,
        measured in 0.0f64..100.0,
    ) {
        let res = project_daily_average(input(limit, hour, measured, 0.0)).unwrap();
        if let Some(ceiling) = res.max_allowed().filter(|c| !c.is_already_exceeded()) {
            let at = project_daily_average(input(limit, hour, measured, ceiling.reported_mg_m3())).unwrap();
            prop_assert!((at.projected_average_mg_m3 - limit).abs() <= 1e-9 * limit);
        }
    }

    #[test]
    fn no_time_left_is_day_elapsed(hour in 24.0f64..48.0) {
        let err = project_daily_average(input(50.0, hour, 10.0, 10.0)).unwrap_err();
        let is_day_elapsed = matches!(err, ProjectionError::DayElapsed { .. });
        prop_assert!(is_day_elapsed);
    }
}
