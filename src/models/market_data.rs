use serde::{Deserialize, Serialize};

/// 한 시점의 시세. 빌더를 통과한 봉의 가격은 모두 양수이고 유한하다
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// 초 단위 Unix epoch
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PriceBar {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: Option<f64>) -> Self {
        PriceBar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn has_valid_prices(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p > 0.0)
    }
}

/// 시계열 마지막 두 봉 사이의 변동
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub last_close: f64,
    pub previous_close: f64,
    pub change_value: f64,
    pub change_pct: f64,
    pub last_timestamp: i64,
}
