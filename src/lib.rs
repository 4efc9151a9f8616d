//! 시장 데이터 리서치 라이브러리
//!
//! 공급자별 가격 시계열을 정규화하고 기술 지표 묶음을 계산합니다.
//! 차트 렌더러와 리포트 생성기는 이 크레이트의 결과를 읽기만 합니다.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod models;
pub mod utils;

// 핵심 타입 재노출
pub use crate::core::candidate_selector::{pick_strongest, pick_top_mover, rank_candidates};
pub use crate::core::catalog_cache::{CatalogCache, CatalogSource, Clock, SystemClock};
pub use crate::core::research::{analyze, analyze_rows, resolve_request, AssetAnalysis, InstrumentRequest};
pub use crate::error::ResearchError;
pub use crate::indicators::{compute_indicators, IndicatorBundle, IndicatorValue, MacdReading};
pub use crate::market_data::{build_series, RowMapping};
pub use crate::models::market_data::{PriceBar, PriceChange};
pub use crate::models::series::Series;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ResearchError>;
