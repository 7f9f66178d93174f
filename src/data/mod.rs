/// Data layer: record types, loading, and the aggregation engine.
///
/// Architecture:
/// ```text
///  laureates.json + prizes.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file pair → AwardDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AwardDataset  │  laureates, prizes, id index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  query    │ ───▶ │  series   │  grouped counts → sorted [x, y] pairs
///   └──────────┘      └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod query;
pub mod series;
