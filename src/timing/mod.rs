//! Call-coalescing timing primitives.

pub mod debounce;

pub use debounce::{DebounceEdge, Debounced, debounce};
