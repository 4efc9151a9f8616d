//! 지표 엔진 성질 테스트

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use statrs::statistics::Statistics;

use quant_research::indicators::{
  ema, ema_series, macd, realized_volatility, rsi, sma, IndicatorBundle, IndicatorValue,
};

fn random_walk(seed: u64, n: usize) -> Vec<f64> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut price = 100.0;
  (0..n)
    .map(|_| {
      price *= 1.0 + rng.gen_range(-0.05..0.05);
      price
    })
    .collect()
}

#[rstest]
#[case(20, 19, false)]
#[case(20, 20, true)]
#[case(50, 49, false)]
#[case(50, 50, true)]
fn test_moving_average_thresholds(#[case] period: usize, #[case] n: usize, #[case] available: bool) {
  let closes = random_walk(7, n);
  assert_eq!(sma(&closes, period).is_available(), available);
  assert_eq!(ema(&closes, period).is_available(), available);
}

#[rstest]
#[case(14, 14, false)]
#[case(14, 15, true)]
#[case(0, 100, false)]
fn test_rsi_threshold(#[case] period: usize, #[case] n: usize, #[case] available: bool) {
  assert_eq!(rsi(&random_walk(11, n), period).is_available(), available);
}

#[rstest]
#[case(30, false)]
#[case(31, true)]
fn test_volatility_threshold(#[case] n: usize, #[case] available: bool) {
  assert_eq!(realized_volatility(&random_walk(3, n), 30).is_available(), available);
}

#[rstest]
#[case(33, false)]
#[case(34, true)]
fn test_macd_threshold(#[case] n: usize, #[case] available: bool) {
  assert_eq!(macd(&random_walk(5, n)).is_available(), available);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn test_random_walk_bounds(#[case] seed: u64) {
  let closes = random_walk(seed, 200);
  let lo = closes.iter().cloned().fold(f64::INFINITY, f64::min);
  let hi = closes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

  let value = rsi(&closes, 14).value().unwrap();
  assert!((0.0..=100.0).contains(&value));

  let vol = realized_volatility(&closes, 30).value().unwrap();
  assert!(vol >= 0.0);

  for period in [20, 50] {
    let avg = sma(&closes, period).value().unwrap();
    assert!(avg >= lo && avg <= hi);
    let smoothed = ema(&closes, period).value().unwrap();
    assert!(smoothed >= lo && smoothed <= hi);
  }

  let reading = macd(&closes).value().unwrap();
  assert!((reading.histogram - (reading.macd - reading.signal)).abs() < 1e-9);
}

#[test]
fn test_ema_series_prefix_is_undefined() {
  let series = ema_series(&random_walk(9, 30), 20);
  assert_eq!(series.len(), 30);
  assert!(series[..19].iter().all(Option::is_none));
  assert!(series[19..].iter().all(Option::is_some));
}

#[test]
fn test_volatility_matches_reference_std_dev() {
  let closes = random_walk(21, 80);
  let window = &closes[closes.len() - 31..];
  let returns: Vec<f64> = window.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();

  let expected = returns.iter().std_dev();
  let actual = realized_volatility(&closes, 30).value().unwrap();
  assert!((actual - expected).abs() < 1e-12);
}

#[test]
fn test_bundle_is_deterministic() {
  let closes = random_walk(42, 120);
  assert_eq!(IndicatorBundle::from_closes(&closes), IndicatorBundle::from_closes(&closes));
}

#[test]
fn test_flat_series() {
  let closes = vec![25.0; 60];
  let bundle = IndicatorBundle::from_closes(&closes);

  assert_eq!(bundle.sma20, IndicatorValue::Value(25.0));
  assert_eq!(bundle.rsi14, IndicatorValue::Value(100.0));
  assert_eq!(bundle.volatility30d, IndicatorValue::Value(0.0));
}
