//! Memory model for the interpreter
//!
//! - [`symbols`]: the per-run [`SymbolStore`] mapping variable ids to values
//!
//! Values are 32-bit signed integers. There is no heap or scoping, and no
//! persistence: the store is created when a run starts and dropped with it.

pub mod symbols;

pub use symbols::SymbolStore;
