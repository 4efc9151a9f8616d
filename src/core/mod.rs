//! 리서치 흐름의 핵심 구현체

pub mod candidate_selector;
pub mod catalog_cache;
pub mod research;
