//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::Builder;
use log::LevelFilter;

use crate::error::ResearchError;
use crate::utils::format_timestamp;

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// 로그 레벨 문자열 파싱 (알 수 없는 값은 info)
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 로깅 시스템 초기화. 이미 초기화된 경우 그대로 둔다
pub fn init(level: &str) -> Result<(), ResearchError> {
    let level_filter = parse_level(level);

    let result = Builder::from_default_env()
        .filter_level(level_filter)
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::info!("로깅 시스템 초기화 완료: 레벨 = {}", level_filter);
    }

    Ok(())
}

/// 시계열 생성 로그
pub fn log_series_built(source: &str, kept: usize, dropped: usize) {
    if dropped > 0 {
        log::warn!("시계열 생성: {} - 유효 행: {} - 제외 행: {}", source, kept, dropped);
    } else {
        log::debug!("시계열 생성: {} - 유효 행: {}", source, kept);
    }
}

/// 카탈로그 갱신 로그
pub fn log_catalog_refresh(entries: Option<usize>, fetched_at: i64) {
    match entries {
        Some(n) => log::info!("카탈로그 갱신: 항목 {}개 - 시각: {}", n, format_timestamp(fetched_at, LOG_TIME_FORMAT)),
        None => log::info!("카탈로그 갱신 - 시각: {}", format_timestamp(fetched_at, LOG_TIME_FORMAT)),
    }
}

/// 오류 로그
pub fn log_error(context: &str, error: &ResearchError) {
    if error.is_short_history() {
        log::warn!("데이터 부족 - {}: {}", context, error);
    } else {
        log::error!("오류 발생 - {}: {}", context, error);
    }
}
