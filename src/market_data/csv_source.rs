use std::io::Read;

use csv::StringRecord;

use crate::error::ResearchError;
use crate::models::market_data::PriceBar;
use crate::models::series::Series;
use super::{build_series, RowMapping};

/// 헤더가 있는 `timestamp,open,high,low,close[,volume]` CSV (타임스탬프는 초 단위)
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvBarMapping;

fn cell(record: &StringRecord, index: usize, field: &str) -> Result<f64, ResearchError> {
    record
        .get(index)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| ResearchError::MalformedRow(format!("non-numeric {}", field)))
}

impl RowMapping for CsvBarMapping {
    type Row = StringRecord;

    fn source_name(&self) -> &str {
        "csv"
    }

    fn map_row(&self, record: &StringRecord) -> Result<PriceBar, ResearchError> {
        let timestamp = record
            .get(0)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or_else(|| ResearchError::MalformedRow("non-integer timestamp".to_string()))?;

        Ok(PriceBar {
            timestamp,
            open: cell(record, 1, "open")?,
            high: cell(record, 2, "high")?,
            low: cell(record, 3, "low")?,
            close: cell(record, 4, "close")?,
            volume: cell(record, 5, "volume").ok(),
        })
    }
}

/// 모든 레코드 읽기. 열 개수가 다른 행도 남겨 두고 매핑에서 판단한다
pub fn csv_records<R: Read>(reader: R) -> Result<Vec<StringRecord>, ResearchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ResearchError::ParseError(e.to_string()))
}

pub fn csv_series<R: Read>(reader: R) -> Result<Series, ResearchError> {
    build_series(&csv_records(reader)?, &CsvBarMapping)
}
