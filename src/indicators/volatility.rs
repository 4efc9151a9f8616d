/**
* filename : volatility
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

use crate::utils::math::{sample_std_dev, simple_returns};
use super::{Indicator, IndicatorValue};

pub const DEFAULT_VOLATILITY_WINDOW: usize = 30;

/// 최근 window 개 단순 수익률의 표본 표준 편차
pub fn realized_volatility(closes: &[f64], window: usize) -> IndicatorValue<f64> {
  if window == 0 || closes.len() < window + 1 {
    return IndicatorValue::InsufficientData;
  }

  let returns = simple_returns(&closes[closes.len() - (window + 1)..]);
  sample_std_dev(&returns).into()
}

#[derive(Debug)]
pub struct RealizedVolatility {
  name: String,
  window: usize,
}

impl RealizedVolatility {
  pub fn new(window: usize) -> Self {
    RealizedVolatility {
      name: format!("VOL-{}", window),
      window,
    }
  }

  pub fn window(&self) -> usize {
    self.window
  }
}

impl Default for RealizedVolatility {
  fn default() -> Self {
    RealizedVolatility::new(DEFAULT_VOLATILITY_WINDOW)
  }
}

impl Indicator for RealizedVolatility {
  type Output = f64;

  fn name(&self) -> &str {
    &self.name
  }

  fn min_samples(&self) -> usize {
    self.window + 1
  }

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<f64> {
    realized_volatility(closes, self.window)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indicators::linear_closes;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  #[test]
  fn test_requires_window_plus_one() {
    assert_eq!(realized_volatility(&linear_closes(100.0, 1.0, 30), 30), IndicatorValue::InsufficientData);
    assert!(realized_volatility(&linear_closes(100.0, 1.0, 31), 30).is_available());
  }

  #[test]
  fn test_window_of_one_has_single_return() {
    // 수익률 1개로는 표본 표준 편차가 정의되지 않는다
    assert_eq!(realized_volatility(&[100.0, 101.0], 1), IndicatorValue::InsufficientData);
  }

  #[test]
  fn test_constant_growth_has_zero_volatility() {
    let mut closes = vec![100.0];
    for _ in 0..40 {
      let last = *closes.last().unwrap();
      closes.push(last * 2.0);
    }
    assert_eq!(realized_volatility(&closes, 30), IndicatorValue::Value(0.0));
  }

  #[test]
  fn test_only_trailing_window_counts() {
    // 앞부분의 큰 변동은 윈도우 밖이면 무시된다
    let mut closes = vec![100.0, 300.0, 50.0];
    closes.extend(vec![80.0; 31]);
    assert_eq!(realized_volatility(&closes, 30), IndicatorValue::Value(0.0));
  }

  #[test]
  fn test_known_value() {
    // 수익률: +10%, -10% → 평균 0, 표본 분산 (0.01 + 0.01)/1
    let value = realized_volatility(&[100.0, 110.0, 99.0], 2).value().unwrap();
    assert!((value - 0.02f64.sqrt()).abs() < 1e-12);
  }

  #[test]
  fn test_non_negative_on_random_walk() {
    let mut rng = StdRng::seed_from_u64(11);
    let closes: Vec<f64> = (0..90).map(|_| rng.gen_range(50.0..150.0)).collect();
    let value = RealizedVolatility::default().calculate(&closes).value().unwrap();
    assert!(value > 0.0);
  }
}
