//! 리서치 파이프라인
//!
//! 원본 행 → 시계열 → 지표 묶음 + 차트 구간 + 가격 변동.
//! 종목 요청 해석 (명시적 심볼 또는 가장 강한 후보) 도 여기서 처리한다.

use serde::Serialize;

use crate::core::candidate_selector::pick_strongest;
use crate::core::catalog_cache::{CatalogCache, CatalogSource};
use crate::error::ResearchError;
use crate::indicators::{compute_indicators, IndicatorBundle};
use crate::market_data::{build_series, RowMapping};
use crate::models::candidate::InstrumentSnapshot;
use crate::models::catalog::CatalogEntry;
use crate::models::market_data::{PriceBar, PriceChange};
use crate::models::series::Series;

/// 차트 렌더러와 리포트 생성기에 넘기는 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAnalysis {
  pub price: PriceChange,
  pub chart: Vec<PriceBar>,
  pub indicators: IndicatorBundle,
  pub bar_count: usize,
}

/// 지표는 전체 시계열로 계산하고 차트만 마지막 `chart_window` 개로 자른다
pub fn analyze(series: &Series, chart_window: usize) -> AssetAnalysis {
  let indicators = compute_indicators(series);
  let price = series.price_change();

  let missing = indicators.missing();
  if !missing.is_empty() {
    log::debug!("워밍업 중인 지표 ({}개 봉): {:?}", series.len(), missing);
  }
  log::info!(
    "분석 완료: 봉 {}개 - 종가 {:.4} ({:+.2}%)",
    series.len(),
    price.last_close,
    price.change_pct
  );

  AssetAnalysis {
    price,
    chart: series.tail(chart_window).to_vec(),
    indicators,
    bar_count: series.len(),
  }
}

pub fn analyze_rows<M: RowMapping>(
  rows: &[M::Row],
  mapping: &M,
  chart_window: usize,
) -> Result<AssetAnalysis, ResearchError> {
  let series = build_series(rows, mapping)?;
  Ok(analyze(&series, chart_window))
}

/// 분석할 종목 지정 방식
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentRequest {
  /// 사용자가 입력한 심볼/ID/이름
  Explicit(String),
  /// 지정 없음: 스냅샷에서 가장 강한 종목
  Strongest(Vec<InstrumentSnapshot>),
}

/// 요청을 공급자 종목 ID 로 해석
pub async fn resolve_request<S>(
  request: &InstrumentRequest,
  cache: &CatalogCache<S>,
) -> Result<String, ResearchError>
where
  S: CatalogSource<Catalog = Vec<CatalogEntry>>,
{
  match request {
    InstrumentRequest::Explicit(query) if !query.trim().is_empty() => {
      let entry = cache.resolve(query).await?;
      log::debug!("종목 해석: {} → {}", query.trim(), entry.id);
      Ok(entry.id)
    }
    InstrumentRequest::Explicit(_) => Err(ResearchError::InstrumentNotFound(String::new())),
    InstrumentRequest::Strongest(snapshot) => pick_strongest(snapshot),
  }
}
