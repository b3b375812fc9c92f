//! Data layer: order records, filtering, and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + normalize rows → OrderStore
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ OrderStore │  Vec<OrderRecord>, distinct values per dimension
//!   └────────────┘
//!        │   FilterSet
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  AND over every dimension → FilteredView
//!   └──────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌──────────┐
//!   │ metrics  │   │   geo    │
//!   └──────────┘   └──────────┘
//!        └──────┬───────┘
//!               ▼
//!         DashboardSnapshot
//! ```

pub mod filter;
pub mod geo;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod snapshot;
