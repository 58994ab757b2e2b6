use tracing_subscriber::{fmt, EnvFilter};

/// 로그 구독자를 설치한다.
///
/// RUST_LOG 환경 변수가 있으면 그 필터를, 없으면 `default_level`을 사용한다.
/// 대화형 CLI는 프롬프트와 섞이지 않도록 stderr로 출력한다.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

