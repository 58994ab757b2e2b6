use vle_anticipation::clock::{FixedTime, TimeSource};
use vle_anticipation::time_split::{parse_clock, TimeSplit, TimeSplitError};

#[test]
fn clock_input_becomes_decimal_hour() {
    let split = TimeSplit::from_clock(14, 30).expect("14:30");
    assert_eq!(split.decimal_hour(), 14.5);
    assert_eq!(split.elapsed_hours(), 14.5);
    assert_eq!(split.remaining_hours(), 9.5);
    assert!(!split.is_day_over());
    assert_eq!(split.clock_parts(), (14, 30));
}

#[test]
fn clock_input_out_of_range_is_rejected() {
    assert_eq!(
        TimeSplit::from_clock(24, 0),
        Err(TimeSplitError::HourOutOfRange(24))
    );
    assert_eq!(
        TimeSplit::from_clock(10, 60),
        Err(TimeSplitError::MinuteOutOfRange(60))
    );
}

#[test]
fn decimal_hour_bounds() {
    assert!(TimeSplit::at_hour(24.0).expect("24h").is_day_over());
    assert!(matches!(
        TimeSplit::at_hour(-0.5),
        Err(TimeSplitError::InvalidHour(_))
    ));
    assert!(matches!(
        TimeSplit::at_hour(f64::NAN),
        Err(TimeSplitError::InvalidHour(_))
    ));
}

#[test]
fn parses_common_time_formats() {
    assert_eq!(parse_clock("14:30").unwrap().decimal_hour(), 14.5);
    assert_eq!(parse_clock(" 9h15 ").unwrap().decimal_hour(), 9.25);
    assert_eq!(parse_clock("7").unwrap().decimal_hour(), 7.0);
    assert!(matches!(parse_clock("noon"), Err(TimeSplitError::Parse(_))));
    assert_eq!(parse_clock("12:").unwrap().decimal_hour(), 12.0);
    assert_eq!(
        parse_clock("25:00"),
        Err(TimeSplitError::HourOutOfRange(25))
    );
}

#[test]
fn fixed_time_source_feeds_split() {
    let clock = FixedTime(6.75);
    let split = TimeSplit::at_hour(clock.decimal_hour()).expect("split");
    assert_eq!(split.remaining_hours(), 17.25);
}
