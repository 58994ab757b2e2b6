//! 24h 평균 예측 기준 시나리오.
use vle_anticipation::projection::{
    classify, project_daily_average, ComplianceClass, Condition, LimitAssessment,
    ProjectionError, ProjectionInput, RemainingCeiling,
};
use vle_anticipation::time_split::TimeSplit;

fn input(limit: f64, hour: f64, measured: f64, proposed: f64) -> ProjectionInput {
    ProjectionInput {
        limit_mg_m3: limit,
        split: TimeSplit::at_hour(hour).expect("valid hour"),
        measured_average_mg_m3: measured,
        proposed_mg_m3: proposed,
    }
}

fn assert_close(label: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn steady_run_at_eighty_percent_is_near_limit() {
    // 14h00, 0시 이후 평균 40, 남은 시간도 40 유지
    let res = project_daily_average(input(50.0, 14.0, 40.0, 40.0)).expect("projection");
    assert_eq!(res.projected_average_mg_m3, 40.0);
    assert_eq!(res.ratio(), Some(0.8));
    assert_eq!(res.class(), Some(ComplianceClass::NearLimit));
    assert_eq!(res.max_allowed(), Some(RemainingCeiling::Allowed(64.0)));
    assert!(res.conditions().is_empty());
}

#[test]
fn exactly_at_limit_is_not_exceeded() {
    let res = project_daily_average(input(50.0, 20.0, 60.0, 0.0)).expect("projection");
    assert_eq!(res.projected_average_mg_m3, 50.0);
    assert_eq!(res.ratio(), Some(1.0));
    assert_eq!(res.class(), Some(ComplianceClass::NearLimit));
    // (50*24 - 60*20) / 4 = 0 → 남은 시간에 허용 농도 없음
    assert_eq!(
        res.max_allowed(),
        Some(RemainingCeiling::AlreadyExceeded { raw_mg_m3: 0.0 })
    );
    assert_eq!(res.conditions(), vec![Condition::AlreadyExceeded]);
}

#[test]
fn last_hour_still_adjustable() {
    for proposed in [0.0, 15.0, 180.0] {
        let res = project_daily_average(input(10.0, 23.0, 9.5, proposed)).expect("projection");
        match res.max_allowed() {
            Some(RemainingCeiling::Allowed(v)) => assert_close("max allowed", v, 21.5),
            other => panic!("expected positive ceiling, got {other:?}"),
        }
    }
}

#[test]
fn end_of_day_reports_day_elapsed() {
    let err = project_daily_average(input(50.0, 24.0, 40.0, 40.0)).unwrap_err();
    assert_eq!(err, ProjectionError::DayElapsed { elapsed_hours: 24.0 });

    let err = project_daily_average(input(50.0, 25.5, 40.0, 40.0)).unwrap_err();
    assert!(matches!(err, ProjectionError::DayElapsed { .. }));
}

#[test]
fn zero_limit_withholds_assessment() {
    let res = project_daily_average(input(0.0, 14.0, 40.0, 40.0)).expect("projection");
    assert_eq!(res.assessment, LimitAssessment::UndefinedLimit);
    assert_eq!(res.ratio(), None);
    assert_eq!(res.class(), None);
    assert_eq!(res.max_allowed(), None);
    assert_eq!(res.conditions(), vec![Condition::UndefinedLimit]);
    assert_eq!(res.projected_average_mg_m3, 40.0);

    let res = project_daily_average(input(-5.0, 14.0, 0.0, 0.0)).expect("projection");
    assert_eq!(res.conditions(), vec![Condition::UndefinedLimit]);
}

#[test]
fn exceedance_is_strictly_above_limit() {
    let res = project_daily_average(input(50.0, 12.0, 60.0, 60.0)).expect("projection");
    assert_eq!(res.class(), Some(ComplianceClass::Exceeded));
    assert_close("ratio %", res.ratio_percent().expect("ratio"), 120.0);
    // 50*24 - 60*12 = 480 → 480 / 12 = 40
    assert_eq!(res.max_allowed(), Some(RemainingCeiling::Allowed(40.0)));
}

#[test]
fn heavy_morning_makes_exceedance_unavoidable() {
    let res = project_daily_average(input(10.0, 18.0, 20.0, 0.0)).expect("projection");
    assert_eq!(res.class(), Some(ComplianceClass::Exceeded));
    let ceiling = res.max_allowed().expect("ceiling");
    assert!(ceiling.is_already_exceeded());
    // (240 - 360) / 6 = -20, 표시값은 0으로 클램프
    assert_eq!(ceiling, RemainingCeiling::AlreadyExceeded { raw_mg_m3: -20.0 });
    assert_eq!(ceiling.reported_mg_m3(), 0.0);
}

#[test]
fn low_run_is_compliant() {
    let res = project_daily_average(input(150.0, 8.0, 30.0, 60.0)).expect("projection");
    // (30*8 + 60*16) / 24 = 50
    assert_eq!(res.projected_average_mg_m3, 50.0);
    assert_eq!(res.class(), Some(ComplianceClass::Compliant));
}

#[test]
fn midnight_projection_equals_proposed() {
    let res = project_daily_average(input(50.0, 0.0, 999.0, 30.0)).expect("projection");
    assert_close("projected", res.projected_average_mg_m3, 30.0);
}

#[test]
fn negative_or_nan_concentrations_are_rejected() {
    assert!(matches!(
        project_daily_average(input(50.0, 10.0, -1.0, 10.0)),
        Err(ProjectionError::InvalidInput(_))
    ));
    assert!(matches!(
        project_daily_average(input(50.0, 10.0, 10.0, f64::NAN)),
        Err(ProjectionError::InvalidInput(_))
    ));
    assert!(matches!(
        project_daily_average(input(f64::INFINITY, 10.0, 10.0, 10.0)),
        Err(ProjectionError::InvalidInput(_))
    ));
}

#[test]
fn classify_boundaries() {
    assert_eq!(classify(40.0, 50.0, 0.8), ComplianceClass::NearLimit);
    assert_eq!(classify(39.9, 50.0, 39.9 / 50.0), ComplianceClass::Compliant);
    assert_eq!(classify(50.0, 50.0, 1.0), ComplianceClass::NearLimit);
    assert_eq!(classify(50.01, 50.0, 50.01 / 50.0), ComplianceClass::Exceeded);
}
