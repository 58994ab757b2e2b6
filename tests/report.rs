use vle_anticipation::app::{self, AppError, ProjectionRequest};
use vle_anticipation::config::Config;
use vle_anticipation::i18n::{fill_template, keys, Translator};
use vle_anticipation::limits_db::LimitTable;
use vle_anticipation::projection::{project_daily_average, ProjectionInput};
use vle_anticipation::report::{self, Tone};
use vle_anticipation::time_split::TimeSplit;

fn render(limit: f64, hour: f64, measured: f64, proposed: f64) -> Vec<report::ReportLine> {
    let tr = Translator::new("en");
    let outcome = project_daily_average(ProjectionInput {
        limit_mg_m3: limit,
        split: TimeSplit::at_hour(hour).expect("hour"),
        measured_average_mg_m3: measured,
        proposed_mg_m3: proposed,
    });
    report::render(&tr, &outcome, proposed, 2)
}

#[test]
fn near_limit_report_lines() {
    let lines = render(50.0, 14.0, 40.0, 40.0);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Elapsed 14.00 h / remaining 10.00 h",
            "Operating concentration: 40.00 mg/m³",
            "Estimated daily average (24 h): 40.00 mg/m³",
            "[ORANGE] Close to the limit (80 % of limit)",
            "Maximum allowed concentration until 24:00: 64.00 mg/m³",
        ]
    );
    assert_eq!(lines[3].tone, Tone::Warning);
}

#[test]
fn unavoidable_exceedance_is_flagged() {
    let lines = render(10.0, 18.0, 20.0, 0.0);
    assert_eq!(lines[3].tone, Tone::Danger);
    assert!(lines[3].text.contains("150 %"));
    assert_eq!(lines[4].text, "Exceedance already unavoidable for the day.");
}

#[test]
fn undefined_limit_never_reads_compliant() {
    let lines = render(0.0, 10.0, 5.0, 5.0);
    assert!(lines.iter().all(|l| !l.text.contains("Compliant")));
    assert_eq!(
        lines.last().map(|l| l.text.as_str()),
        Some("Limit is zero or missing: compliance cannot be evaluated.")
    );
}

#[test]
fn day_elapsed_is_single_message() {
    let lines = render(50.0, 24.0, 40.0, 40.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].tone, Tone::Danger);
    assert_eq!(
        lines[0].text,
        "The day is over: no remaining time for adjustment."
    );
}

#[test]
fn translations_fall_back_to_english() {
    let fr = Translator::new("fr-FR");
    assert_eq!(fr.language_code(), "fr");
    assert_eq!(
        fr.t(keys::REPORT_ALREADY_EXCEEDED),
        "Dépassement déjà inévitable sur la journée."
    );
    let ko = Translator::new("ko");
    assert_eq!(ko.t(keys::ERROR_PREFIX), "오류");
    assert_eq!(ko.t("no.such.key"), "no.such.key");
    assert_eq!(
        fill_template("{a}-{b}-{a}", &[("a", "x".into()), ("b", "y".into())]),
        "x-y-x"
    );
}

#[test]
fn project_once_resolves_limit_from_table() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let request = ProjectionRequest {
        pollutant: Some("so2".into()),
        limit_mg_m3: None,
        split: TimeSplit::from_clock(12, 0).expect("noon"),
        measured_average_mg_m3: 20.0,
        proposed_mg_m3: 20.0,
    };
    let lines = app::project_once(&cfg, &tr, &request).expect("lines");
    assert_eq!(lines[0].text, "24 h limit for SO2: 40.00 mg/m³");
    assert!(lines.iter().any(|l| l.text.contains("Compliant (50 % of limit)")));
}

#[test]
fn project_once_rejects_unknown_pollutant_and_bad_input() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let mut request = ProjectionRequest {
        pollutant: Some("Benzene".into()),
        limit_mg_m3: None,
        split: TimeSplit::from_clock(12, 0).expect("noon"),
        measured_average_mg_m3: 20.0,
        proposed_mg_m3: 20.0,
    };
    assert!(matches!(
        app::project_once(&cfg, &tr, &request),
        Err(AppError::UnknownPollutant(name)) if name == "Benzene"
    ));

    request.limit_mg_m3 = Some(5.0);
    assert!(app::project_once(&cfg, &tr, &request).is_ok());

    request.measured_average_mg_m3 = -1.0;
    assert!(matches!(
        app::project_once(&cfg, &tr, &request),
        Err(AppError::Projection(_))
    ));
}

#[test]
fn resolve_limit_prefers_override() {
    let table = LimitTable::default();
    let (name, limit) = app::resolve_limit(&table, Some("HF"), Some(2.0)).expect("resolve");
    assert_eq!((name.as_str(), limit), ("HF", 2.0));
    let (name, limit) = app::resolve_limit(&table, Some("hf"), None).expect("resolve");
    assert_eq!((name.as_str(), limit), ("HF", 1.0));
}

#[test]
fn project_once_reports_day_elapsed_as_result() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let request = ProjectionRequest {
        pollutant: Some("CO".into()),
        limit_mg_m3: None,
        split: TimeSplit::at_hour(24.0).expect("24h"),
        measured_average_mg_m3: 40.0,
        proposed_mg_m3: 40.0,
    };
    let lines = app::project_once(&cfg, &tr, &request).expect("day elapsed is not an error");
    assert_eq!(
        lines.last().map(|l| l.text.as_str()),
        Some("The day is over: no remaining time for adjustment.")
    );
    assert_eq!(lines.last().map(|l| l.tone), Some(Tone::Danger));
}

#[test]
fn direct_limit_is_not_labelled_with_default_pollutant() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let request = ProjectionRequest {
        pollutant: None,
        limit_mg_m3: Some(0.0),
        split: TimeSplit::from_clock(10, 0).expect("10h"),
        measured_average_mg_m3: 5.0,
        proposed_mg_m3: 5.0,
    };
    let lines = app::project_once(&cfg, &tr, &request).expect("lines");
    assert_eq!(lines[0].text, "24 h limit (direct entry): 0.00 mg/m³");
    assert!(lines.iter().all(|l| !l.text.contains("CO")));

    let request = ProjectionRequest {
        limit_mg_m3: None,
        ..request
    };
    let lines = app::project_once(&cfg, &tr, &request).expect("lines");
    assert_eq!(lines[0].text, "24 h limit for CO: 50.00 mg/m³");
}
