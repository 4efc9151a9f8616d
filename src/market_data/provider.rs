//! 공급자별 원본 페이로드 어댑터
//!
//! 암호화폐 OHLC 는 배열의 배열, 주식 일봉은 날짜 키 객체로 온다.
//! 각 형태마다 명시적인 매핑을 두어 지표 엔진은 공급자를 알 필요가 없다.

use serde_json::{Map, Value};

use crate::error::ResearchError;
use crate::models::market_data::PriceBar;
use crate::models::series::Series;
use crate::utils::{iso_date_to_timestamp, millis_to_seconds};
use super::{build_series, RowMapping};

/// 주식 일봉 페이로드에서 시계열이 들어 있는 키
pub const DAILY_SERIES_KEY: &str = "Time Series (Daily)";

// 데이터 대신 오는 안내/제한/오류 메시지 키
const PROVIDER_MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// JSON 숫자 또는 숫자 문자열을 유한한 f64 로 파싱
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    if parsed.is_finite() {
        Some(parsed)
    } else {
        None
    }
}

fn required_field(value: Option<&Value>, field: &str) -> Result<f64, ResearchError> {
    value
        .and_then(parse_number)
        .ok_or_else(|| ResearchError::MalformedRow(format!("non-numeric {}", field)))
}

/// `[time_ms, open, high, low, close(, volume)]` 배열 행
#[derive(Debug, Default, Clone, Copy)]
pub struct OhlcArrayMapping;

impl RowMapping for OhlcArrayMapping {
    type Row = Value;

    fn source_name(&self) -> &str {
        "crypto-ohlc"
    }

    fn map_row(&self, row: &Value) -> Result<PriceBar, ResearchError> {
        let cells = row
            .as_array()
            .ok_or_else(|| ResearchError::MalformedRow("row is not an array".to_string()))?;

        let time_ms = required_field(cells.first(), "time")?;

        Ok(PriceBar {
            timestamp: millis_to_seconds(time_ms.floor() as i64),
            open: required_field(cells.get(1), "open")?,
            high: required_field(cells.get(2), "high")?,
            low: required_field(cells.get(3), "low")?,
            close: required_field(cells.get(4), "close")?,
            volume: cells.get(5).and_then(parse_number),
        })
    }
}

/// 날짜 키 → `{"1. open", "2. high", "3. low", "4. close", "6. volume" | "5. volume"}`
#[derive(Debug, Default, Clone, Copy)]
pub struct DailySeriesMapping;

impl RowMapping for DailySeriesMapping {
    type Row = (String, Value);

    fn source_name(&self) -> &str {
        "equity-daily"
    }

    fn map_row(&self, row: &(String, Value)) -> Result<PriceBar, ResearchError> {
        let (date, fields) = row;

        // 고정 형식 ISO 날짜만 사전순 정렬이 시간순과 일치한다
        let timestamp = iso_date_to_timestamp(date).ok_or_else(|| ResearchError::InvalidDate(date.clone()))?;

        let fields = fields
            .as_object()
            .ok_or_else(|| ResearchError::MalformedRow(format!("{} has no field object", date)))?;

        let volume = fields
            .get("6. volume")
            .and_then(parse_number)
            .or_else(|| fields.get("5. volume").and_then(parse_number));

        Ok(PriceBar {
            timestamp,
            open: required_field(fields.get("1. open"), "open")?,
            high: required_field(fields.get("2. high"), "high")?,
            low: required_field(fields.get("3. low"), "low")?,
            close: required_field(fields.get("4. close"), "close")?,
            volume,
        })
    }
}

/// 암호화폐 OHLC 페이로드의 행 배열
pub fn ohlc_rows(payload: &Value) -> Result<&[Value], ResearchError> {
    payload
        .as_array()
        .map(|rows| rows.as_slice())
        .ok_or_else(|| ResearchError::UnexpectedPayload("OHLC payload is not an array".to_string()))
}

fn provider_message(object: &Map<String, Value>) -> Option<String> {
    PROVIDER_MESSAGE_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// 주식 일봉 페이로드에서 (날짜, 필드) 행을 날짜 사전순으로 추출
pub fn daily_rows(payload: &Value) -> Result<Vec<(String, Value)>, ResearchError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ResearchError::UnexpectedPayload("daily payload is not an object".to_string()))?;

    let series = match object.get(DAILY_SERIES_KEY).and_then(Value::as_object) {
        Some(series) => series,
        None => {
            return Err(match provider_message(object) {
                Some(message) => ResearchError::ProviderMessage(message),
                None => ResearchError::UnexpectedPayload(format!("missing \"{}\"", DAILY_SERIES_KEY)),
            })
        }
    };

    let mut rows: Vec<(String, Value)> = series
        .iter()
        .map(|(date, fields)| (date.clone(), fields.clone()))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(rows)
}

pub fn crypto_ohlc_series(payload: &Value) -> Result<Series, ResearchError> {
    build_series(ohlc_rows(payload)?, &OhlcArrayMapping)
}

pub fn equity_daily_series(payload: &Value) -> Result<Series, ResearchError> {
    build_series(&daily_rows(payload)?, &DailySeriesMapping)
}
