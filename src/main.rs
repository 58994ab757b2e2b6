use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use vle_anticipation::app::{self, AppError, ProjectionRequest};
use vle_anticipation::clock::{SystemClock, TimeSource};
use vle_anticipation::config;
use vle_anticipation::i18n::{self, keys, Translator};
use vle_anticipation::logging;
use vle_anticipation::time_split::{self, TimeSplit};
use vle_anticipation::ui_cli;

/// 일일 배출 한계(VLE 24 h) 초과 예측 도구.
#[derive(Debug, Parser)]
#[command(name = "vle_anticipation_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 코드 (auto/ko/en/fr)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 (기본)
    Interactive,
    /// 한 번 계산하고 결과를 출력한다
    Project(ProjectArgs),
    /// 현재 한계 테이블을 출력한다
    Limits,
}

#[derive(Debug, Args)]
struct ProjectArgs {
    /// 한계 테이블의 오염물질 이름 (생략 시 설정의 기본 오염물질)
    #[arg(long, short)]
    pollutant: Option<String>,
    /// 일일 한계 직접 입력 [mg/m³]
    #[arg(long)]
    limit: Option<f64>,
    /// 현재 시각 HH:MM
    #[arg(long, conflicts_with_all = ["hour", "now"])]
    time: Option<String>,
    /// 현재 시각(소수 시각, 예: 14.5)
    #[arg(long, conflicts_with = "now")]
    hour: Option<f64>,
    /// 시스템 시계의 현재 시각 사용
    #[arg(long)]
    now: bool,
    /// 0시 이후 평균 농도 [mg/m³]
    #[arg(long, short)]
    average: f64,
    /// 24시까지 운전 농도 [mg/m³]
    #[arg(long)]
    proposed: f64,
}

impl ProjectArgs {
    fn split(&self, clock: &dyn TimeSource) -> Result<TimeSplit, AppError> {
        let split = match (&self.time, self.hour) {
            (Some(text), _) => time_split::parse_clock(text)?,
            (None, Some(h)) => TimeSplit::at_hour(h)?,
            (None, None) => {
                if !self.now {
                    tracing::info!("no time given, using the system clock");
                }
                TimeSplit::at_hour(clock.decimal_hour())?
            }
        };
        Ok(split)
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init("warn");
    let mut tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
    match try_run(cli, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, tr: &mut Translator) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    *tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let clock = SystemClock;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(&mut cfg, tr, &clock),
        Command::Project(args) => {
            let request = ProjectionRequest {
                pollutant: args.pollutant.clone(),
                limit_mg_m3: args.limit,
                split: args.split(&clock)?,
                measured_average_mg_m3: args.average,
                proposed_mg_m3: args.proposed,
            };
            for line in app::project_once(&cfg, tr, &request)? {
                println!("{}", line.text);
            }
            Ok(())
        }
        Command::Limits => {
            let table = cfg.limit_table()?;
            println!("{}", tr.t(keys::LIMITS_HEADING).trim_start());
            ui_cli::print_limits(tr, &cfg, &table);
            Ok(())
        }
    }
}
