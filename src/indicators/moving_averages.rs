/**
* filename : moving_averages
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::utils::math::mean;
use super::{Indicator, IndicatorValue};

/// 최근 period 개 종가의 단순 평균
pub fn sma(closes: &[f64], period: usize) -> IndicatorValue<f64> {
  if period == 0 || closes.len() < period {
    return IndicatorValue::InsufficientData;
  }

  mean(&closes[closes.len() - period..]).into()
}

/// EMA 전체 배열
///
/// 인덱스 period-1 에 첫 period 개 값의 단순 평균을 시드로 두고,
/// 그 이후는 ema[i] = C[i]*k + ema[i-1]*(1-k), k = 2/(period+1).
/// 시드 이전 인덱스는 None 으로 남긴다 (0 으로 채우지 않음).
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
  let n = values.len();
  let mut result = vec![None; n];

  if period == 0 || n < period {
    return result;
  }

  let k = 2.0 / (period as f64 + 1.0);

  let mut prev = match mean(&values[..period]) {
    Some(seed) => seed,
    None => return result,
  };
  result[period - 1] = Some(prev);

  for i in period..n {
    prev = values[i] * k + prev * (1.0 - k);
    result[i] = Some(prev);
  }

  result
}

/// 마지막으로 계산된 EMA 값
pub fn ema(closes: &[f64], period: usize) -> IndicatorValue<f64> {
  ema_series(closes, period)
    .last()
    .copied()
    .flatten()
    .into()
}

#[derive(Debug)]
pub struct SimpleMovingAverage {
  name: String,
  period: usize,
}

impl SimpleMovingAverage {
  pub fn new(period: usize) -> Self {
    SimpleMovingAverage {
      name: format!("SMA-{}", period),
      period,
    }
  }

  pub fn period(&self) -> usize {
    self.period
  }
}

impl Indicator for SimpleMovingAverage {
  type Output = f64;

  fn name(&self) -> &str {
    &self.name
  }

  fn min_samples(&self) -> usize {
    self.period
  }

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<f64> {
    sma(closes, self.period)
  }
}

#[derive(Debug)]
pub struct ExponentialMovingAverage {
  name: String,
  period: usize,
}

impl ExponentialMovingAverage {
  pub fn new(period: usize) -> Self {
    ExponentialMovingAverage {
      name: format!("EMA-{}", period),
      period,
    }
  }

  pub fn period(&self) -> usize {
    self.period
  }

  /// 평활 계수 k = 2/(period+1)
  pub fn alpha(&self) -> f64 {
    2.0 / (self.period as f64 + 1.0)
  }

  pub fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
    ema_series(closes, self.period)
  }
}

impl Indicator for ExponentialMovingAverage {
  type Output = f64;

  fn name(&self) -> &str {
    &self.name
  }

  fn min_samples(&self) -> usize {
    self.period
  }

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<f64> {
    ema(closes, self.period)
  }
}
