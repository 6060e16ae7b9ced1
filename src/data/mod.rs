/// Data layer: core types, CSV I/O, and the batch transform.
///
/// Architecture:
/// ```text
///  products.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  header row + Vec<ProductRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  process  │  strip brands, parse weights, drop unweighed rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod process;
