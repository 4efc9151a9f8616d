use serde::Serialize;

use crate::error::ResearchError;
use crate::models::market_data::{PriceBar, PriceChange};

/// 시계열이 성립하기 위한 최소 봉 개수
pub const MIN_SERIES_LEN: usize = 2;

/// 타임스탬프가 순증가하는 불변 봉 시퀀스
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    bars: Vec<PriceBar>,
}

impl Series {
    /// 이미 정규화된 봉만 받는다. 보통은 빌더를 거친다
    pub(crate) fn from_canonical(bars: Vec<PriceBar>) -> Self {
        debug_assert!(bars.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Series { bars }
    }

    /// 외부에서 정규화한 봉 검증
    pub fn try_from_bars(bars: Vec<PriceBar>) -> Result<Self, ResearchError> {
        if bars.len() < MIN_SERIES_LEN {
            return Err(ResearchError::InsufficientData {
                required: MIN_SERIES_LEN,
                available: bars.len(),
            });
        }

        if let Some(bad) = bars.iter().find(|b| !b.has_valid_prices()) {
            return Err(ResearchError::MalformedRow(format!(
                "bar at {} has non-positive or non-finite prices",
                bad.timestamp
            )));
        }

        if let Some(w) = bars.windows(2).find(|w| w[0].timestamp >= w[1].timestamp) {
            return Err(ResearchError::ParseError(format!(
                "timestamps not strictly increasing: {} then {}",
                w[0].timestamp, w[1].timestamp
            )));
        }

        Ok(Series { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn latest(&self) -> &PriceBar {
        // 생성 시 최소 2개 보장
        &self.bars[self.bars.len() - 1]
    }

    pub fn previous(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 2]
    }

    /// 마지막 `n` 개 봉 (더 짧으면 전체)
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    pub fn price_change(&self) -> PriceChange {
        let latest = self.latest();
        let previous = self.previous();
        let change_value = latest.close - previous.close;

        PriceChange {
            last_close: latest.close,
            previous_close: previous.close,
            change_value,
            change_pct: crate::utils::math::calculate_return(previous.close, latest.close),
            last_timestamp: latest.timestamp,
        }
    }
}
