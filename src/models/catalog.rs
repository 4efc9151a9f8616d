use serde::{Deserialize, Serialize};

/// 종목 디렉터리 항목 (ID, 티커, 표시 이름)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        CatalogEntry {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// 사용자 질의를 디렉터리 항목으로 해석
///
/// ID 정확 일치 → 티커 → 표시 이름 순. 티커와 이름은 대소문자 무시
pub fn resolve_instrument<'a>(query: &str, catalog: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    catalog
        .iter()
        .find(|entry| entry.id == query)
        .or_else(|| catalog.iter().find(|entry| entry.symbol.to_lowercase() == query))
        .or_else(|| catalog.iter().find(|entry| entry.name.to_lowercase() == query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("bitcoin", "btc", "Bitcoin"),
            CatalogEntry::new("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin"),
            CatalogEntry::new("btc", "btcx", "Imposter"),
            CatalogEntry::new("ethereum", "eth", "Ethereum"),
        ]
    }

    #[test]
    fn test_id_match_wins_over_symbol() {
        let list = catalog();
        assert_eq!(resolve_instrument("btc", &list).unwrap().name, "Imposter");
    }

    #[test]
    fn test_symbol_then_name_case_insensitive() {
        let list = catalog();
        assert_eq!(resolve_instrument("  ETH ", &list).unwrap().id, "ethereum");
        assert_eq!(resolve_instrument("wrapped bitcoin", &list).unwrap().id, "wrapped-bitcoin");
    }

    #[test]
    fn test_empty_or_unknown_query() {
        let list = catalog();
        assert!(resolve_instrument("   ", &list).is_none());
        assert!(resolve_instrument("dogecoin", &list).is_none());
    }
}
