//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!   abs,rel,del,tag  (.csv)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse rows → TabularDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ TabularDataset  │  Vec<Record> + NumericView (abs, rel, del)
//!   └────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  column projection / tag selection
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
