#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::{env, fs};
use vle_anticipation::{
    clock::{SystemClock, TimeSource},
    config, i18n,
    i18n::keys,
    limits_db::LimitTable,
    logging,
    projection::{self, ProjectionError, ProjectionInput, ProjectionResult},
    report::{self, ReportLine, Tone},
    time_split::TimeSplit,
};

#[derive(Debug, Parser)]
#[command(name = "vle_anticipation", version)]
struct GuiArgs {
    /// 언어 코드 (auto/ko/en/fr)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logging::init("info");

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = match config::load_or_default_at(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("config load failed, using defaults: {e}");
            config::Config::default()
        }
    };
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "VLE 24 h",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 글리프가 있는 시스템 폰트를 찾아 폴백으로 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );
    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_fallback");
            return Ok(());
        }
    }
    Err("no CJK font found; Korean labels may not render".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_owned());
    }
    ctx.set_fonts(fonts);
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Info => egui::Color32::from_rgb(0x1f, 0x4e, 0x79),
        Tone::Success => egui::Color32::from_rgb(0x2e, 0x7d, 0x32),
        Tone::Warning => egui::Color32::from_rgb(0xef, 0x6c, 0x00),
        Tone::Danger => egui::Color32::from_rgb(0xc6, 0x28, 0x28),
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    table: LimitTable,
    pollutant: String,
    limit_mg_m3: f64,
    hour: u32,
    minute: u32,
    measured_mg_m3: f64,
    // 슬라이더와 숫자 입력이 함께 바인딩하는 단일 값
    proposed_mg_m3: f64,
    show_settings: bool,
    lang_input: String,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let (table, status) = match config.limit_table() {
            Ok(t) => (t, None),
            Err(e) => (LimitTable::default(), Some(e.to_string())),
        };
        let mut s = Self {
            lang_input: config.language.clone(),
            tr,
            pollutant: String::new(),
            limit_mg_m3: 0.0,
            hour: config.default_hour.min(23),
            minute: config.default_minute.min(59),
            measured_mg_m3: config.default_measured_mg_m3.max(0.0),
            proposed_mg_m3: config.clamp_proposed(config.default_measured_mg_m3),
            show_settings: false,
            status,
            table,
            config,
        };
        let default = s.config.default_pollutant.clone();
        s.select_pollutant(&default);
        s
    }

    /// 오염물질을 선택하고 테이블의 한계값을 가져온다. 없으면 첫 항목.
    fn select_pollutant(&mut self, name: &str) {
        let entry = self
            .table
            .find(name)
            .or_else(|| self.table.entries().first())
            .cloned();
        if let Some(e) = entry {
            self.pollutant = e.pollutant;
            self.limit_mg_m3 = e.limit_mg_m3;
        }
    }

    fn set_limit_table(&mut self, table: LimitTable) {
        self.table = table;
        self.config.set_limit_table(&self.table);
        let current = self.pollutant.clone();
        self.select_pollutant(&current);
    }

    fn evaluate(&self) -> Result<ProjectionResult, ProjectionError> {
        let split = TimeSplit::from_clock(self.hour, self.minute)
            .map_err(|_| ProjectionError::InvalidInput("시각이 범위를 벗어났습니다."))?;
        projection::project_daily_average(ProjectionInput {
            limit_mg_m3: self.limit_mg_m3,
            split,
            measured_average_mg_m3: self.measured_mg_m3,
            proposed_mg_m3: self.proposed_mg_m3,
        })
    }

    fn report_lines(&self) -> Vec<ReportLine> {
        report::render(
            &self.tr,
            &self.evaluate(),
            self.proposed_mg_m3,
            self.config.decimals(),
        )
    }

    fn import_limits(&mut self) {
        let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        match LimitTable::load(&path) {
            Ok(table) => {
                self.set_limit_table(table);
                self.status = Some(path.display().to_string());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "limit table import failed: {e}");
                self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.proposed_mg_m3 = self.config.clamp_proposed(self.proposed_mg_m3);
        self.status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::GUI_POLLUTANT));
                let mut selected = self.pollutant.clone();
                egui::ComboBox::from_id_source("pollutant")
                    .selected_text(&selected)
                    .show_ui(ui, |ui| {
                        for name in self.table.names() {
                            ui.selectable_value(&mut selected, name.to_string(), name);
                        }
                    });
                if selected != self.pollutant {
                    self.select_pollutant(&selected);
                }
                ui.end_row();

                ui.label(tr.t(keys::GUI_LIMIT));
                ui.add(
                    egui::DragValue::new(&mut self.limit_mg_m3)
                        .speed(0.1)
                        .clamp_range(0.0..=f64::MAX),
                );
                ui.end_row();

                ui.label(format!("{} / {}", tr.t(keys::GUI_HOUR), tr.t(keys::GUI_MINUTE)));
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut self.hour).clamp_range(0..=23));
                    ui.label(":");
                    ui.add(egui::DragValue::new(&mut self.minute).clamp_range(0..=59));
                    if ui.button(tr.t(keys::GUI_NOW)).clicked() {
                        let h = SystemClock.decimal_hour();
                        let total_min = (h * 60.0).floor() as u32;
                        self.hour = (total_min / 60).min(23);
                        self.minute = total_min % 60;
                    }
                });
                ui.end_row();

                ui.label(tr.t(keys::GUI_MEASURED));
                ui.add(
                    egui::DragValue::new(&mut self.measured_mg_m3)
                        .speed(0.1)
                        .clamp_range(0.0..=f64::MAX),
                );
                ui.end_row();
            });

        ui.separator();
        ui.label(tr.t(keys::GUI_PROPOSED));
        let max = self.config.proposed_ceiling();
        ui.horizontal(|ui| {
            ui.add(
                egui::Slider::new(&mut self.proposed_mg_m3, 0.0..=max)
                    .step_by(0.01)
                    .show_value(false),
            );
            ui.add(
                egui::DragValue::new(&mut self.proposed_mg_m3)
                    .speed(0.01)
                    .max_decimals(2)
                    .clamp_range(0.0..=max),
            );
        });
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::REPORT_HEADING));
        for line in self.report_lines() {
            let text = egui::RichText::new(line.text).color(tone_color(line.tone));
            let text = if line.tone == Tone::Info {
                text
            } else {
                text.strong().size(16.0)
            };
            ui.label(text);
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let tr = self.tr.clone();
        egui::Window::new(tr.t(keys::GUI_SETTINGS))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::GUI_SETTINGS_LANG));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        ui.selectable_value(&mut self.lang_input, "fr".into(), "Français");
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_DECIMALS));
                    ui.add(egui::DragValue::new(&mut self.config.display_decimals).clamp_range(1..=2));
                });
                ui.horizontal(|ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_PROPOSED_MAX));
                    ui.add(
                        egui::DragValue::new(&mut self.config.proposed_max_mg_m3)
                            .speed(1.0)
                            .clamp_range(1.0..=10_000.0),
                    );
                });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(tr.t(keys::GUI_SETTINGS_IMPORT_LIMITS)).clicked() {
                        self.import_limits();
                    }
                    if ui.button(tr.t(keys::GUI_SETTINGS_RESET_LIMITS)).clicked() {
                        self.set_limit_table(LimitTable::default());
                        self.config.limits.clear();
                    }
                });
                ui.separator();
                if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                    self.save_settings();
                }
                if let Some(msg) = &self.status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::GUI_TITLE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.tr.t(keys::GUI_SETTINGS)).clicked() {
                        self.show_settings = !self.show_settings;
                    }
                });
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::GUI_SUBTITLE));
                    ui.separator();
                    self.ui_inputs(ui);
                    ui.separator();
                    self.ui_results(ui);
                });
        });
    }
}
