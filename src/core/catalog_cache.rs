/**
* filename : catalog_cache
* author : HAMA
* date: 2025. 5. 13.
* description: TTL 기반 종목 카탈로그 캐시
**/

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::error::ResearchError;
use crate::models::catalog::{resolve_instrument, CatalogEntry};
use crate::utils::logging;

/// 카탈로그를 가져오는 원천 (HTTP 공급자, 파일, 테스트 더블 등)
#[async_trait]
pub trait CatalogSource: Send + Sync {
    type Catalog: Clone + Send + Sync;

    async fn fetch(&self) -> Result<Self::Catalog, ResearchError>;

    /// 로그용 항목 수
    fn entry_count(_catalog: &Self::Catalog) -> Option<usize> {
        None
    }
}

/// 현재 시각 공급자
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CachedCatalog<C> {
    catalog: Arc<C>,
    fetched_at: DateTime<Utc>,
}

/// 마지막 성공 조회 후 TTL 동안 같은 카탈로그를 돌려준다.
///
/// 만료되었거나 비어 있으면 원천에서 다시 가져와 통째로 교체한다.
/// 조회 실패는 호출자에게 전달되며 기존 슬롯은 건드리지 않는다.
pub struct CatalogCache<S: CatalogSource> {
    source: S,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CachedCatalog<S::Catalog>>>,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(source: S, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        CatalogCache {
            source,
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 신선한 카탈로그 반환 (필요하면 갱신)
    pub async fn get(&self) -> Result<Arc<S::Catalog>, ResearchError> {
        let now = self.clock.now();

        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                let age = now - cached.fetched_at;
                if age < self.ttl {
                    log::debug!("카탈로그 캐시 적중: 경과 {}초", age.num_seconds());
                    return Ok(Arc::clone(&cached.catalog));
                }
            }
        }

        // 락 없이 조회. 동시 갱신이 겹치면 마지막 결과가 남는다
        let catalog = match self.source.fetch().await {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                logging::log_error("카탈로그 갱신", &e);
                return Err(e);
            }
        };

        logging::log_catalog_refresh(S::entry_count(&catalog), now.timestamp());

        let mut slot = self.slot.write().await;
        *slot = Some(CachedCatalog {
            catalog: Arc::clone(&catalog),
            fetched_at: now,
        });

        Ok(catalog)
    }

    /// 다음 get() 이 반드시 원천을 조회하도록 비운다
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    /// 마지막 성공 조회 시각
    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.as_ref().map(|cached| cached.fetched_at)
    }
}

impl<S> CatalogCache<S>
where
    S: CatalogSource<Catalog = Vec<CatalogEntry>>,
{
    /// 사용자 질의를 카탈로그 항목으로 해석
    pub async fn resolve(&self, query: &str) -> Result<CatalogEntry, ResearchError> {
        let catalog = self.get().await?;
        resolve_instrument(query, &catalog)
            .cloned()
            .ok_or_else(|| ResearchError::InstrumentNotFound(query.trim().to_string()))
    }
}
