//! 시간 관련 유틸리티
//!
//! 공급자 타임스탬프를 초 단위 epoch 로 맞추는 변환 함수 제공

pub mod logging;
pub mod math;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// ISO 날짜 키 형식 (고정 길이라서 사전순 비교가 시간순과 같다)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 밀리초 타임스탬프를 초 단위로 내림 변환
pub fn millis_to_seconds(timestamp_ms: i64) -> i64 {
  timestamp_ms.div_euclid(1000)
}

/// 초 단위 타임스탬프를 DateTime<Utc>로 변환
pub fn timestamp_to_datetime(timestamp_secs: i64) -> Option<DateTime<Utc>> {
  Utc.timestamp_opt(timestamp_secs, 0).single()
}

/// `YYYY-MM-DD` 형식만 허용, 해당 날짜 UTC 자정의 초 단위 타임스탬프 반환
pub fn iso_date_to_timestamp(date: &str) -> Option<i64> {
  let is_fixed_format = date.len() == 10
    && date.bytes().enumerate().all(|(i, b)| match i {
      4 | 7 => b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !is_fixed_format {
    return None;
  }

  let day = NaiveDate::parse_from_str(date, ISO_DATE_FORMAT).ok()?;
  let midnight = day.and_hms_opt(0, 0, 0)?;
  Some(midnight.and_utc().timestamp())
}

/// 타임스탬프(초)를 포맷팅된 문자열로 변환
pub fn format_timestamp(timestamp_secs: i64, format: &str) -> String {
  timestamp_to_datetime(timestamp_secs)
    .map(|dt| dt.format(format).to_string())
    .unwrap_or_default()
}
