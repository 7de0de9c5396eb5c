/// Data layer: normalisation, filtering, and ranking.
///
/// Architecture:
/// ```text
///   archivo.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  schema (headers, phases) + coerce (Valor) → SwimDataset
///   └──────────┘     memoised by cache (path + content digest)
///        │
///        ▼
///   ┌────────────┐
///   │ SwimDataset │  Vec<SwimRecord>, distinct values per field
///   └────────────┘
///        │
///        ├──────────────► ranking  best "T TOTAL" per swimmer (no swimmer selected)
///        ▼
///   ┌──────────┐
///   │  filter   │  five-field AND predicate → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  category charts, per-swimmer tables (labels from catalog)
///   └──────────┘
/// ```

pub mod cache;
pub mod catalog;
pub mod coerce;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ranking;
pub mod schema;
pub mod views;
