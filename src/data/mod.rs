/// Data layer: record types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  ICGC API / .json / .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch / parse → MutationPayload
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MutationData  │  Vec<MutationRecord>, per-label counts
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  chromosome / type predicate → new MutationData
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
