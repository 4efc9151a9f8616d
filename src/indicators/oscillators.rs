/**
* filename : oscillators
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use super::{Indicator, IndicatorValue};

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Wilder 방식으로 평활한 RSI
///
/// 첫 period 개 변화량의 단순 평균으로 시작해 이후 변화량마다
/// avg = (avg*(period-1) + x)/period 로 갱신한다. 평균 손실이 0 이면 100.
pub fn rsi(closes: &[f64], period: usize) -> IndicatorValue<f64> {
  if period == 0 || closes.len() <= period {
    return IndicatorValue::InsufficientData;
  }

  let p = period as f64;
  let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

  // 초기 평균 계산
  let (gains, losses) = deltas[..period]
    .iter()
    .fold((0.0, 0.0), |(g, l), &d| if d < 0.0 { (g, l - d) } else { (g + d, l) });
  let mut avg_gain = gains / p;
  let mut avg_loss = losses / p;

  // 평균 업데이트 (Wilder의 스무딩 방법)
  for &delta in &deltas[period..] {
    let gain = if delta < 0.0 { 0.0 } else { delta };
    let loss = if delta < 0.0 { -delta } else { 0.0 };

    avg_gain = (avg_gain * (p - 1.0) + gain) / p;
    avg_loss = (avg_loss * (p - 1.0) + loss) / p;
  }

  if avg_loss == 0.0 {
    // 분모가 0인 경우 최대값으로 처리
    return IndicatorValue::Value(100.0);
  }

  // RSI = 100 - (100 / (1 + RS))
  let rs = avg_gain / avg_loss;
  IndicatorValue::Value(100.0 - 100.0 / (1.0 + rs))
}

#[derive(Debug)]
pub struct RelativeStrengthIndex {
  name: String,
  period: usize,
}

impl RelativeStrengthIndex {
  pub fn new(period: usize) -> Self {
    RelativeStrengthIndex {
      name: format!("RSI-{}", period),
      period,
    }
  }

  pub fn period(&self) -> usize {
    self.period
  }
}

impl Default for RelativeStrengthIndex {
  fn default() -> Self {
    RelativeStrengthIndex::new(DEFAULT_RSI_PERIOD)
  }
}

impl Indicator for RelativeStrengthIndex {
  type Output = f64;

  fn name(&self) -> &str {
    &self.name
  }

  fn min_samples(&self) -> usize {
    self.period + 1
  }

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<f64> {
    rsi(closes, self.period)
  }
}
