/**
* filename : mod
* author : HAMA
* date: 2025. 5. 11.
* description:
**/
pub mod bundle;
pub mod moving_averages;
pub mod oscillators;
pub mod trend;
pub mod volatility;

pub use bundle::*;
pub use moving_averages::*;
pub use oscillators::*;
pub use trend::*;
pub use volatility::*;

use std::fmt::Debug;

use serde::{Serialize, Serializer};

/// 지표 값 또는 데이터 부족 상태
///
/// 데이터 부족은 오류가 아니라 정상적인 결과다. 0 으로 대체하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorValue<T> {
  Value(T),
  InsufficientData,
}

impl<T> IndicatorValue<T> {
  pub fn is_available(&self) -> bool {
    matches!(self, IndicatorValue::Value(_))
  }

  pub fn value(self) -> Option<T> {
    match self {
      IndicatorValue::Value(v) => Some(v),
      IndicatorValue::InsufficientData => None,
    }
  }

  pub fn as_ref(&self) -> IndicatorValue<&T> {
    match self {
      IndicatorValue::Value(v) => IndicatorValue::Value(v),
      IndicatorValue::InsufficientData => IndicatorValue::InsufficientData,
    }
  }

  pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> IndicatorValue<U> {
    match self {
      IndicatorValue::Value(v) => IndicatorValue::Value(f(v)),
      IndicatorValue::InsufficientData => IndicatorValue::InsufficientData,
    }
  }
}

impl<T> From<Option<T>> for IndicatorValue<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => IndicatorValue::Value(v),
      None => IndicatorValue::InsufficientData,
    }
  }
}

// 소비자(차트, 리포트)는 데이터 부족을 null 로 받는다
impl<T: Serialize> Serialize for IndicatorValue<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      IndicatorValue::Value(v) => serializer.serialize_some(v),
      IndicatorValue::InsufficientData => serializer.serialize_none(),
    }
  }
}

/// 종가 시퀀스 전체를 받아 최신 값을 계산하는 지표
pub trait Indicator: Debug + Send + Sync {
  type Output;

  fn name(&self) -> &str;

  // 값을 낼 수 있는 최소 종가 개수 (기간이 0 이면 어떤 길이로도 값이 없다)
  fn min_samples(&self) -> usize;

  fn calculate(&self, closes: &[f64]) -> IndicatorValue<Self::Output>;

  fn is_ready(&self, closes: &[f64]) -> bool {
    self.calculate(closes).is_available()
  }
}

/// 테스트용 종가 시퀀스 생성 (start 부터 step 간격)
#[cfg(test)]
pub(crate) fn linear_closes(start: f64, step: f64, n: usize) -> Vec<f64> {
  (0..n).map(|i| start + step * i as f64).collect()
}
