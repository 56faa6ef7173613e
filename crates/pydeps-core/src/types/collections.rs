//! Fast hash collections. `FxHashMap`/`FxHashSet` for string-keyed lookups
//! on the hot path (graph node index, module namespaces).

pub use rustc_hash::{FxHashMap, FxHashSet};
