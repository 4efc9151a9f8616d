/**
* filename : mod
* author : HAMA
* date: 2025. 5. 12.
* description: 공급자별 원본 행을 정렬된 시계열로 정규화
**/

pub mod csv_source;
pub mod provider;

pub use csv_source::{csv_records, csv_series, CsvBarMapping};
pub use provider::{
    crypto_ohlc_series, daily_rows, equity_daily_series, ohlc_rows, DailySeriesMapping, OhlcArrayMapping,
};

use crate::error::ResearchError;
use crate::models::market_data::PriceBar;
use crate::models::series::{Series, MIN_SERIES_LEN};
use crate::utils::logging;

/// 공급자 고유 행 형태를 PriceBar 로 바꾸는 규칙
///
/// 숫자가 아닌 가격 필드는 `MalformedRow` 로 돌려주면 빌더가 그 행만 버린다.
/// 그 밖의 오류는 배치 전체를 실패시킨다.
pub trait RowMapping {
    type Row;

    /// 로그에 쓰일 공급자 형태 이름
    fn source_name(&self) -> &str;

    fn map_row(&self, row: &Self::Row) -> Result<PriceBar, ResearchError>;
}

/// 원본 행들을 시간 오름차순 시계열로 변환
pub fn build_series<M: RowMapping>(rows: &[M::Row], mapping: &M) -> Result<Series, ResearchError> {
    let mut bars = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match mapping.map_row(row) {
            Ok(bar) if bar.has_valid_prices() => bars.push(bar),
            Ok(bar) => {
                log::debug!("{} 행 {} 제외: 유효하지 않은 가격 (ts={})", mapping.source_name(), index, bar.timestamp);
                dropped += 1;
            }
            Err(ResearchError::MalformedRow(reason)) => {
                log::debug!("{} 행 {} 제외: {}", mapping.source_name(), index, reason);
                dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    // 안정 정렬 후 같은 타임스탬프는 먼저 들어온 행만 유지
    bars.sort_by_key(|bar| bar.timestamp);
    let before_dedup = bars.len();
    bars.dedup_by_key(|bar| bar.timestamp);
    let duplicates = before_dedup - bars.len();
    if duplicates > 0 {
        log::debug!("{} 중복 타임스탬프 {}개 제외", mapping.source_name(), duplicates);
    }

    logging::log_series_built(mapping.source_name(), bars.len(), dropped + duplicates);

    if bars.len() < MIN_SERIES_LEN {
        return Err(ResearchError::InsufficientData {
            required: MIN_SERIES_LEN,
            available: bars.len(),
        });
    }

    Ok(Series::from_canonical(bars))
}
