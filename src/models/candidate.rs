use serde::{Deserialize, Serialize};

/// 시장 스냅샷의 한 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSnapshot {
    pub id: String,
    #[serde(default, alias = "price_change_percentage_24h")]
    pub change_pct_24h: Option<f64>,
    #[serde(default, alias = "total_volume")]
    pub volume: Option<f64>,
}

impl InstrumentSnapshot {
    pub fn new(id: impl Into<String>, change_pct_24h: f64, volume: f64) -> Self {
        InstrumentSnapshot {
            id: id.into(),
            change_pct_24h: Some(change_pct_24h),
            volume: Some(volume),
        }
    }
}

/// 상승 상위 목록의 주식 종목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub change_percentage: Option<String>,
}

/// 후보 선택 중에만 쓰이는 점수
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub instrument_id: String,
    pub change_pct: f64,
    pub volume: f64,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_accepts_provider_field_names() {
        let raw = r#"{"id":"bitcoin","price_change_percentage_24h":2.5,"total_volume":1000.0,"symbol":"btc"}"#;
        let snap: InstrumentSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snap.id, "bitcoin");
        assert_eq!(snap.change_pct_24h, Some(2.5));
        assert_eq!(snap.volume, Some(1000.0));
    }

    #[test]
    fn test_snapshot_missing_fields_default_to_none() {
        let snap: InstrumentSnapshot = serde_json::from_str(r#"{"id":"x","changePct24h":null}"#).unwrap();
        assert_eq!(snap.change_pct_24h, None);
        assert_eq!(snap.volume, None);
    }
}
