/**
* filename : trend
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use serde::Serialize;

use super::{Indicator, IndicatorValue, moving_averages::ema_series};

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdReading {
  pub macd: f64,
  pub signal: f64,
  pub histogram: f64,
}

/// MACD 라인 (fast EMA - slow EMA), 두 EMA 가 모두 정의된 인덱스만 Some
pub fn macd_line(closes: &[f64], fast_period: usize, slow_period: usize) -> Vec<Option<f64>> {
  let fast = ema_series(closes, fast_period);
  let slow = ema_series(closes, slow_period);

  fast.iter()
    .zip(slow.iter())
    .map(|(f, s)| match (f, s) {
      (Some(f), Some(s)) => Some(f - s),
      _ => None,
    })
    .collect()
}

#[derive(Debug)]
pub struct MACD {
  name: String,
  fast_period: usize,
  slow_period: usize,
  signal_period: usize,
}

impl MACD {
  pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
    MACD {
      name: format!("MACD-{}-{}-{}", fast_period, slow_period, signal_period),
      fast_period,
      slow_period,
      signal_period,
    }
  }
}

impl Default for MACD {
  fn default() -> Self {
    MACD::new(MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD)
  }
}

impl Indicator for MACD {
  type Output = MacdReading;

  fn name(&self) -> &str {
    &self.name
  }

  fn min_samples(&self) -> usize {
    // slow EMA 워밍업 후 시그널 EMA 워밍업
    let line_start = self.fast_period.max(self.slow_period).saturating_sub(1);
    line_start + self.signal_period
  }

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<MacdReading> {
    if closes.len() < self.slow_period || self.signal_period == 0 {
      return IndicatorValue::InsufficientData;
    }

    // 정의된 MACD 값만 원래 순서대로 모은다
    let defined: Vec<f64> = macd_line(closes, self.fast_period, self.slow_period)
      .into_iter()
      .flatten()
      .collect();
    if defined.len() < self.signal_period {
      return IndicatorValue::InsufficientData;
    }

    let signal_line = ema_series(&defined, self.signal_period);
    match (defined.last(), signal_line.last().copied().flatten()) {
      (Some(&macd), Some(signal)) => IndicatorValue::Value(MacdReading {
        macd,
        signal,
        histogram: macd - signal,
      }),
      _ => IndicatorValue::InsufficientData,
    }
  }
}

/// 12/26/9 MACD
pub fn macd(closes: &[f64]) -> IndicatorValue<MacdReading> {
  MACD::default().calculate(closes)
}
