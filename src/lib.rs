//! Workspace root package; hosts the criterion benchmarks in `benches/`.

pub use buckingham::*;
