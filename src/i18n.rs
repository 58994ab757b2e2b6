use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_POLLUTANT: &str = "error.unknown_pollutant";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PROJECTION: &str = "main_menu.projection";
    pub const MAIN_MENU_LIMITS: &str = "main_menu.limits";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const PROMPT_POLLUTANT: &str = "prompt.pollutant";
    pub const PROMPT_LIMIT_OVERRIDE: &str = "prompt.limit_override";
    pub const PROMPT_TIME: &str = "prompt.time";
    pub const PROMPT_MEASURED: &str = "prompt.measured";
    pub const PROMPT_PROPOSED: &str = "prompt.proposed";
    pub const INFO_LIMIT: &str = "projection.info_limit";
    pub const INFO_LIMIT_DIRECT: &str = "projection.info_limit_direct";
    pub const INFO_PROPOSED_CLAMPED: &str = "projection.proposed_clamped";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_TIME_SPLIT: &str = "report.time_split";
    pub const REPORT_PROPOSED: &str = "report.proposed";
    pub const REPORT_PROJECTED: &str = "report.projected";
    pub const REPORT_EXCEEDED: &str = "report.exceeded";
    pub const REPORT_NEAR_LIMIT: &str = "report.near_limit";
    pub const REPORT_COMPLIANT: &str = "report.compliant";
    pub const REPORT_MAX_ALLOWED: &str = "report.max_allowed";
    pub const REPORT_ALREADY_EXCEEDED: &str = "report.already_exceeded";
    pub const REPORT_UNDEFINED_LIMIT: &str = "report.undefined_limit";
    pub const REPORT_DAY_ELAPSED: &str = "report.day_elapsed";

    pub const LIMITS_HEADING: &str = "limits.heading";
    pub const LIMITS_ROW: &str = "limits.row";
    pub const LIMITS_PROMPT_EDIT: &str = "limits.prompt_edit";
    pub const LIMITS_PROMPT_VALUE: &str = "limits.prompt_value";
    pub const LIMITS_SAVED: &str = "limits.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_PROMPT_PROPOSED_MAX: &str = "settings.prompt_proposed_max";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_SUBTITLE: &str = "gui.subtitle";
    pub const GUI_POLLUTANT: &str = "gui.pollutant";
    pub const GUI_LIMIT: &str = "gui.limit";
    pub const GUI_HOUR: &str = "gui.hour";
    pub const GUI_MINUTE: &str = "gui.minute";
    pub const GUI_NOW: &str = "gui.now";
    pub const GUI_MEASURED: &str = "gui.measured";
    pub const GUI_PROPOSED: &str = "gui.proposed";
    pub const GUI_SETTINGS: &str = "gui.settings";
    pub const GUI_SETTINGS_LANG: &str = "gui.settings_lang";
    pub const GUI_SETTINGS_DECIMALS: &str = "gui.settings_decimals";
    pub const GUI_SETTINGS_PROPOSED_MAX: &str = "gui.settings_proposed_max";
    pub const GUI_SETTINGS_IMPORT_LIMITS: &str = "gui.settings_import_limits";
    pub const GUI_SETTINGS_RESET_LIMITS: &str = "gui.settings_reset_limits";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings_save";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Fr,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("fr") {
            Language::Fr
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/fr)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 번들 → 영어 → 키 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let built_in = match self.lang {
            Language::Ko => ko(key),
            Language::Fr => fr(key),
            Language::En => None,
        };
        built_in.or_else(|| en(key)).unwrap_or(key)
    }

    /// 번역 후 `{name}` 자리표시자를 채운다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("fr") => Some("fr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" | "en" | "fr" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., fr-fr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., fr)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블은 `a.b` 형태의 점 표기 키로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_POLLUTANT => "Unknown pollutant: {name}",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        MAIN_MENU_TITLE => "\n=== VLE 24 h Anticipation ===",
        MAIN_MENU_PROJECTION => "1) Daily average projection",
        MAIN_MENU_LIMITS => "2) Limit table",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROJECTION_HEADING => "\n-- Daily average projection --",
        PROMPT_POLLUTANT => "Pollutant (Enter = {default}): ",
        PROMPT_LIMIT_OVERRIDE => "Daily limit [mg/m³] (Enter = {limit}): ",
        PROMPT_TIME => "Current time HH:MM (Enter = now): ",
        PROMPT_MEASURED => "Average since 00:00 [mg/m³] (Enter = {default}): ",
        PROMPT_PROPOSED => "Operating concentration until 24:00 [mg/m³] (0–{max}): ",
        INFO_LIMIT => "24 h limit for {pollutant}: {limit} mg/m³",
        INFO_LIMIT_DIRECT => "24 h limit (direct entry): {limit} mg/m³",
        INFO_PROPOSED_CLAMPED => "Concentration limited to the allowed input range: {value} mg/m³",
        REPORT_HEADING => "Results",
        REPORT_TIME_SPLIT => "Elapsed {elapsed} h / remaining {remaining} h",
        REPORT_PROPOSED => "Operating concentration: {value} mg/m³",
        REPORT_PROJECTED => "Estimated daily average (24 h): {value} mg/m³",
        REPORT_EXCEEDED => "[RED] Limit exceeded ({ratio} %)",
        REPORT_NEAR_LIMIT => "[ORANGE] Close to the limit ({ratio} % of limit)",
        REPORT_COMPLIANT => "[GREEN] Compliant ({ratio} % of limit)",
        REPORT_MAX_ALLOWED => "Maximum allowed concentration until 24:00: {value} mg/m³",
        REPORT_ALREADY_EXCEEDED => "Exceedance already unavoidable for the day.",
        REPORT_UNDEFINED_LIMIT => "Limit is zero or missing: compliance cannot be evaluated.",
        REPORT_DAY_ELAPSED => "The day is over: no remaining time for adjustment.",
        LIMITS_HEADING => "\n-- Limit table --",
        LIMITS_ROW => "  {pollutant}: {limit} mg/m³",
        LIMITS_PROMPT_EDIT => "Pollutant to add/update (Enter to go back): ",
        LIMITS_PROMPT_VALUE => "New limit [mg/m³]: ",
        LIMITS_SAVED => "Limit table saved.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Language: {lang}, decimals: {decimals}, input max: {max} mg/m³",
        SETTINGS_PROMPT_LANG => "Language auto/ko/en/fr (Enter = keep): ",
        SETTINGS_PROMPT_DECIMALS => "Decimals 1–2 (Enter = keep): ",
        SETTINGS_PROMPT_PROPOSED_MAX => "Input max for the operating concentration (Enter = keep): ",
        SETTINGS_SAVED => "Settings saved.",
        GUI_TITLE => "Daily limit (VLE 24 h) exceedance anticipation",
        GUI_SUBTITLE => "Tune the operating concentration to stay within the daily exposure limit.",
        GUI_POLLUTANT => "Pollutant",
        GUI_LIMIT => "24 h limit [mg/m³]",
        GUI_HOUR => "Hour",
        GUI_MINUTE => "Minute",
        GUI_NOW => "Now",
        GUI_MEASURED => "Average since 00:00 [mg/m³]",
        GUI_PROPOSED => "Operating concentration until 24:00 [mg/m³]",
        GUI_SETTINGS => "Settings",
        GUI_SETTINGS_LANG => "Language",
        GUI_SETTINGS_DECIMALS => "Decimals",
        GUI_SETTINGS_PROPOSED_MAX => "Input max [mg/m³]",
        GUI_SETTINGS_IMPORT_LIMITS => "Import limit table (TOML)…",
        GUI_SETTINGS_RESET_LIMITS => "Restore built-in limits",
        GUI_SETTINGS_SAVE => "Save settings",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_POLLUTANT => "알 수 없는 오염물질: {name}",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        MAIN_MENU_TITLE => "\n=== VLE 24 h 초과 예측 ===",
        MAIN_MENU_PROJECTION => "1) 일평균 예측",
        MAIN_MENU_LIMITS => "2) 한계 테이블",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROJECTION_HEADING => "\n-- 일평균 예측 --",
        PROMPT_POLLUTANT => "오염물질 (엔터 = {default}): ",
        PROMPT_LIMIT_OVERRIDE => "일일 한계 [mg/m³] (엔터 = {limit}): ",
        PROMPT_TIME => "현재 시각 HH:MM (엔터 = 지금): ",
        PROMPT_MEASURED => "0시 이후 평균 농도 [mg/m³] (엔터 = {default}): ",
        PROMPT_PROPOSED => "24시까지 운전 농도 [mg/m³] (0–{max}): ",
        INFO_LIMIT => "{pollutant} 24 h 한계: {limit} mg/m³",
        INFO_LIMIT_DIRECT => "24 h 한계(직접 입력): {limit} mg/m³",
        INFO_PROPOSED_CLAMPED => "입력 범위로 제한된 농도: {value} mg/m³",
        REPORT_HEADING => "결과",
        REPORT_TIME_SPLIT => "경과 {elapsed} h / 잔여 {remaining} h",
        REPORT_PROPOSED => "설정 농도: {value} mg/m³",
        REPORT_PROJECTED => "예상 일평균 (24 h): {value} mg/m³",
        REPORT_EXCEEDED => "[적색] 한계 초과 ({ratio} %)",
        REPORT_NEAR_LIMIT => "[주황] 한계 근접 (한계의 {ratio} %)",
        REPORT_COMPLIANT => "[녹색] 적합 (한계의 {ratio} %)",
        REPORT_MAX_ALLOWED => "24시까지 허용 최대 농도: {value} mg/m³",
        REPORT_ALREADY_EXCEEDED => "오늘은 이미 초과가 불가피합니다.",
        REPORT_UNDEFINED_LIMIT => "한계값이 0이거나 없어 적합 여부를 판정할 수 없습니다.",
        REPORT_DAY_ELAPSED => "하루가 끝났습니다: 조정할 잔여 시간이 없습니다.",
        LIMITS_HEADING => "\n-- 한계 테이블 --",
        LIMITS_ROW => "  {pollutant}: {limit} mg/m³",
        LIMITS_PROMPT_EDIT => "추가/수정할 오염물질 (돌아가려면 엔터): ",
        LIMITS_PROMPT_VALUE => "새 한계 [mg/m³]: ",
        LIMITS_SAVED => "한계 테이블을 저장했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "언어: {lang}, 소수 자릿수: {decimals}, 입력 상한: {max} mg/m³",
        SETTINGS_PROMPT_LANG => "언어 auto/ko/en/fr (엔터 = 유지): ",
        SETTINGS_PROMPT_DECIMALS => "소수 자릿수 1–2 (엔터 = 유지): ",
        SETTINGS_PROMPT_PROPOSED_MAX => "운전 농도 입력 상한 (엔터 = 유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        GUI_TITLE => "일일 배출 한계(VLE 24 h) 초과 예측",
        GUI_SUBTITLE => "일일 한계를 지키도록 운전 농도를 조정합니다.",
        GUI_POLLUTANT => "오염물질",
        GUI_LIMIT => "24 h 한계 [mg/m³]",
        GUI_HOUR => "시",
        GUI_MINUTE => "분",
        GUI_NOW => "현재 시각",
        GUI_MEASURED => "0시 이후 평균 농도 [mg/m³]",
        GUI_PROPOSED => "24시까지 운전 농도 [mg/m³]",
        GUI_SETTINGS => "설정",
        GUI_SETTINGS_LANG => "언어",
        GUI_SETTINGS_DECIMALS => "소수 자릿수",
        GUI_SETTINGS_PROPOSED_MAX => "입력 상한 [mg/m³]",
        GUI_SETTINGS_IMPORT_LIMITS => "한계 테이블 가져오기 (TOML)…",
        GUI_SETTINGS_RESET_LIMITS => "내장 한계로 복원",
        GUI_SETTINGS_SAVE => "설정 저장",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Erreur",
        APP_EXIT => "Fin du programme.",
        ERROR_INVALID_NUMBER => "Veuillez saisir un nombre.",
        ERROR_UNKNOWN_POLLUTANT => "Gaz inconnu : {name}",
        INVALID_SELECTION_RETRY => "Saisie invalide. Recommencez.",
        MAIN_MENU_TITLE => "\n=== Anticipation VLE 24 h ===",
        MAIN_MENU_PROJECTION => "1) Projection de la moyenne journalière",
        MAIN_MENU_LIMITS => "2) Table des VLE",
        MAIN_MENU_SETTINGS => "3) Paramètres",
        MAIN_MENU_EXIT => "0) Quitter",
        PROMPT_MENU_SELECT => "Choix : ",
        PROJECTION_HEADING => "\n-- Projection de la moyenne journalière --",
        PROMPT_POLLUTANT => "Gaz (Entrée = {default}) : ",
        PROMPT_LIMIT_OVERRIDE => "VLE 24 h [mg/m³] (Entrée = {limit}) : ",
        PROMPT_TIME => "Heure actuelle HH:MM (Entrée = maintenant) : ",
        PROMPT_MEASURED => "Concentration moyenne depuis 0h00 [mg/m³] (Entrée = {default}) : ",
        PROMPT_PROPOSED => "Concentration de fonctionnement jusqu'à 24h00 [mg/m³] (0–{max}) : ",
        INFO_LIMIT => "VLE 24 h pour {pollutant} : {limit} mg/m³",
        INFO_LIMIT_DIRECT => "VLE 24 h (saisie directe) : {limit} mg/m³",
        INFO_PROPOSED_CLAMPED => "Concentration ramenée dans la plage autorisée : {value} mg/m³",
        REPORT_HEADING => "Résultats",
        REPORT_TIME_SPLIT => "Écoulé {elapsed} h / restant {remaining} h",
        REPORT_PROPOSED => "Concentration réglée : {value} mg/m³",
        REPORT_PROJECTED => "Moyenne journalière estimée (24 h) : {value} mg/m³",
        REPORT_EXCEEDED => "[ROUGE] Dépassement de la VLE ({ratio} %)",
        REPORT_NEAR_LIMIT => "[ORANGE] Proche de la limite ({ratio} % de la VLE)",
        REPORT_COMPLIANT => "[VERT] Conforme ({ratio} % de la VLE)",
        REPORT_MAX_ALLOWED => "Concentration maximale autorisée jusqu'à 24h00 : {value} mg/m³",
        REPORT_ALREADY_EXCEEDED => "Dépassement déjà inévitable sur la journée.",
        REPORT_UNDEFINED_LIMIT => "VLE nulle ou absente : conformité non évaluable.",
        REPORT_DAY_ELAPSED => "La journée est terminée : aucun temps restant pour ajustement.",
        LIMITS_HEADING => "\n-- Table des VLE --",
        LIMITS_ROW => "  {pollutant} : {limit} mg/m³",
        LIMITS_PROMPT_EDIT => "Gaz à ajouter/modifier (Entrée pour revenir) : ",
        LIMITS_PROMPT_VALUE => "Nouvelle VLE [mg/m³] : ",
        LIMITS_SAVED => "Table des VLE enregistrée.",
        SETTINGS_HEADING => "\n-- Paramètres --",
        SETTINGS_CURRENT => "Langue : {lang}, décimales : {decimals}, maximum de saisie : {max} mg/m³",
        SETTINGS_PROMPT_LANG => "Langue auto/ko/en/fr (Entrée = conserver) : ",
        SETTINGS_PROMPT_DECIMALS => "Décimales 1–2 (Entrée = conserver) : ",
        SETTINGS_PROMPT_PROPOSED_MAX => "Maximum de la concentration de fonctionnement (Entrée = conserver) : ",
        SETTINGS_SAVED => "Paramètres enregistrés.",
        GUI_TITLE => "Anticipation de dépassement VLE 24 h",
        GUI_SUBTITLE => "Outil d'aide au réglage de la concentration de fonctionnement afin de respecter la VLE journalière.",
        GUI_POLLUTANT => "Gaz",
        GUI_LIMIT => "VLE 24 h [mg/m³]",
        GUI_HOUR => "Heure",
        GUI_MINUTE => "Minute",
        GUI_NOW => "Maintenant",
        GUI_MEASURED => "Concentration moyenne actuelle depuis 0h00 [mg/m³]",
        GUI_PROPOSED => "Concentration de fonctionnement jusqu'à la fin de la journée [mg/m³]",
        GUI_SETTINGS => "Paramètres",
        GUI_SETTINGS_LANG => "Langue",
        GUI_SETTINGS_DECIMALS => "Décimales",
        GUI_SETTINGS_PROPOSED_MAX => "Maximum de saisie [mg/m³]",
        GUI_SETTINGS_IMPORT_LIMITS => "Importer une table des VLE (TOML)…",
        GUI_SETTINGS_RESET_LIMITS => "Rétablir les VLE par défaut",
        GUI_SETTINGS_SAVE => "Enregistrer",
        _ => return None,
    })
}
