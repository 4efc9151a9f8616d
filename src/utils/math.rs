//! 수학 관련 유틸리티
//!
//! 지표 계산의 기반이 되는 통계 함수 제공

/// 산술 평균. 빈 입력이면 None
pub fn mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }

  Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 표본 표준 편차 (n-1 분모). 값이 2개 미만이면 None
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
  if values.len() < 2 {
    return None;
  }

  let avg = mean(values)?;
  let variance = values.iter()
    .map(|value| {
      let diff = value - avg;
      diff * diff
    })
    .sum::<f64>() / (values.len() - 1) as f64;

  Some(variance.sqrt())
}

/// 연속된 값 사이의 단순 수익률 (C[i] - C[i-1]) / C[i-1]
pub fn simple_returns(values: &[f64]) -> Vec<f64> {
  values.windows(2)
    .map(|w| (w[1] - w[0]) / w[0])
    .collect()
}

/// 수익률 계산 (백분율)
pub fn calculate_return(entry_price: f64, exit_price: f64) -> f64 {
  (exit_price - entry_price) / entry_price * 100.0
}
