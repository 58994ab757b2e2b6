use std::io::{self, Write};

use crate::app::{self, AppError, ProjectionRequest};
use crate::clock::TimeSource;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::time_split::{self, TimeSplit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Projection,
    Limits,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_LIMITS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Projection),
            "2" => return Ok(MenuChoice::Limits),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 일평균 예측 메뉴를 처리한다.
pub fn handle_projection(
    tr: &Translator,
    cfg: &Config,
    clock: &dyn TimeSource,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    let table = cfg.limit_table()?;
    let decimals = cfg.decimals();

    let names: Vec<&str> = table.names().collect();
    println!("{}", names.join(" | "));
    let entry = loop {
        let input = read_line(&tr.tf(
            keys::PROMPT_POLLUTANT,
            &[("default", cfg.default_pollutant.clone())],
        ))?;
        let name = match input.trim() {
            "" => cfg.default_pollutant.as_str(),
            other => other,
        };
        match table.find(name) {
            Some(entry) => break entry.clone(),
            None => println!(
                "{}",
                tr.tf(keys::ERROR_UNKNOWN_POLLUTANT, &[("name", name.to_string())])
            ),
        }
    };

    let limit = read_optional_f64(
        tr,
        &tr.tf(
            keys::PROMPT_LIMIT_OVERRIDE,
            &[("limit", report::format_value(entry.limit_mg_m3, decimals))],
        ),
    )?
    .unwrap_or(entry.limit_mg_m3);

    let split = loop {
        let input = read_line(tr.t(keys::PROMPT_TIME))?;
        let parsed = if input.trim().is_empty() {
            TimeSplit::at_hour(clock.decimal_hour())
        } else {
            time_split::parse_clock(&input)
        };
        match parsed {
            Ok(split) => break split,
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    };

    let measured = read_optional_f64(
        tr,
        &tr.tf(
            keys::PROMPT_MEASURED,
            &[(
                "default",
                report::format_value(cfg.default_measured_mg_m3, decimals),
            )],
        ),
    )?
    .unwrap_or(cfg.default_measured_mg_m3);

    let raw_proposed = read_f64(
        tr,
        &tr.tf(
            keys::PROMPT_PROPOSED,
            &[("max", report::format_value(cfg.proposed_ceiling(), 0))],
        ),
    )?;
    let proposed = cfg.clamp_proposed(raw_proposed);
    if proposed != raw_proposed {
        println!(
            "{}",
            tr.tf(
                keys::INFO_PROPOSED_CLAMPED,
                &[("value", report::format_value(proposed, decimals))]
            )
        );
    }

    let request = ProjectionRequest {
        pollutant: Some(entry.pollutant.clone()),
        limit_mg_m3: Some(limit),
        split,
        measured_average_mg_m3: measured,
        proposed_mg_m3: proposed,
    };
    match app::project_once(cfg, tr, &request) {
        Ok(lines) => {
            println!("\n{}", tr.t(keys::REPORT_HEADING));
            for line in lines {
                println!("{}", line.text);
            }
        }
        Err(AppError::Projection(e)) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 한계 테이블을 표시하고 항목 추가/수정을 받는다. 변경되었으면 true.
pub fn handle_limits(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::LIMITS_HEADING));
    let mut table = cfg.limit_table()?;
    print_limits(tr, cfg, &table);
    let mut changed = false;
    loop {
        let name = read_line(tr.t(keys::LIMITS_PROMPT_EDIT))?;
        let name = name.trim();
        if name.is_empty() {
            break;
        }
        let value = read_f64(tr, tr.t(keys::LIMITS_PROMPT_VALUE))?;
        match table.upsert(name, value) {
            Ok(()) => {
                changed = true;
                tracing::info!(pollutant = name, limit = value, "limit updated");
                print_limits(tr, cfg, &table);
            }
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
    if changed {
        cfg.set_limit_table(&table);
    }
    Ok(changed)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        tr.tf(
            keys::SETTINGS_CURRENT,
            &[
                ("lang", cfg.language.clone()),
                ("decimals", cfg.decimals().to_string()),
                ("max", report::format_value(cfg.proposed_ceiling(), 0)),
            ],
        )
    );

    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANG))?;
    match lang.trim().to_lowercase().as_str() {
        "" => {}
        code @ ("auto" | "ko" | "en" | "fr") => cfg.language = code.to_string(),
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }

    match read_optional_f64(tr, tr.t(keys::SETTINGS_PROMPT_DECIMALS))? {
        Some(d) if cfg.set_display_decimals(d) => {}
        Some(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        None => {}
    }

    match read_optional_f64(tr, tr.t(keys::SETTINGS_PROMPT_PROPOSED_MAX))? {
        Some(v) if v > 0.0 => cfg.proposed_max_mg_m3 = v,
        Some(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        None => {}
    }
    Ok(())
}

pub fn print_limits(tr: &Translator, cfg: &Config, table: &crate::limits_db::LimitTable) {
    for e in table.entries() {
        println!(
            "{}",
            tr.tf(
                keys::LIMITS_ROW,
                &[
                    ("pollutant", e.pollutant.clone()),
                    ("limit", report::format_value(e.limit_mg_m3, cfg.decimals())),
                ],
            )
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        if let Some(v) = read_optional_f64(tr, prompt)? {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}

/// 빈 입력이면 None. 쉼표 소수점도 허용한다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.replace(',', ".").parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
