/**
* filename : mod
* author : HAMA
* date: 2025. 5. 11.
* description:
**/

pub mod candidate;
pub mod catalog;
pub mod market_data;
pub mod series;

pub use candidate::{CandidateScore, InstrumentSnapshot, TopMover};
pub use catalog::{resolve_instrument, CatalogEntry};
pub use market_data::{PriceBar, PriceChange};
pub use series::Series;
