/**
* filename : bundle
* author : HAMA
* date: 2025. 5. 12.
* description: 요청마다 새로 계산되는 고정 구조의 지표 묶음
**/

use serde::Serialize;

use crate::models::series::Series;
use super::{
  ema, macd, realized_volatility, rsi, sma, IndicatorValue, MacdReading,
  DEFAULT_RSI_PERIOD, DEFAULT_VOLATILITY_WINDOW,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorBundle {
  pub sma20: IndicatorValue<f64>,
  pub sma50: IndicatorValue<f64>,
  pub ema20: IndicatorValue<f64>,
  pub ema50: IndicatorValue<f64>,
  pub rsi14: IndicatorValue<f64>,
  pub macd: IndicatorValue<MacdReading>,
  pub volatility30d: IndicatorValue<f64>,
}

impl IndicatorBundle {
  /// 종가 시퀀스로부터 전체 지표 계산. 실패하지 않는다
  pub fn from_closes(closes: &[f64]) -> Self {
    IndicatorBundle {
      sma20: sma(closes, 20),
      sma50: sma(closes, 50),
      ema20: ema(closes, 20),
      ema50: ema(closes, 50),
      rsi14: rsi(closes, DEFAULT_RSI_PERIOD),
      macd: macd(closes),
      volatility30d: realized_volatility(closes, DEFAULT_VOLATILITY_WINDOW),
    }
  }

  /// 아직 워밍업 중인 지표 이름
  pub fn missing(&self) -> Vec<&'static str> {
    let slots = [
      ("sma20", self.sma20.is_available()),
      ("sma50", self.sma50.is_available()),
      ("ema20", self.ema20.is_available()),
      ("ema50", self.ema50.is_available()),
      ("rsi14", self.rsi14.is_available()),
      ("macd", self.macd.is_available()),
      ("volatility30d", self.volatility30d.is_available()),
    ];

    slots.iter()
      .filter(|(_, available)| !available)
      .map(|(name, _)| *name)
      .collect()
  }

  pub fn is_complete(&self) -> bool {
    self.missing().is_empty()
  }
}

/// 시계열의 종가 투영으로 지표 묶음 계산
pub fn compute_indicators(series: &Series) -> IndicatorBundle {
  IndicatorBundle::from_closes(&series.closes())
}
