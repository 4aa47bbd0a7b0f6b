//! Symbol store: variable id -> integer value
//!
//! One store is created per run and sized to the number of distinct variables
//! the parser discovered. Every slot starts at 0, so reading a variable that
//! was never declared or assigned yields 0.

use crate::interpreter::constants::MAX_VARIABLES;
use crate::parser::ast::VarId;

/// Fixed-capacity table of variable values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolStore {
    values: Vec<i32>,
    written: Vec<bool>,
}

impl SymbolStore {
    /// Create a zero-initialized store with `capacity` slots (at most [`MAX_VARIABLES`])
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_VARIABLES);
        SymbolStore {
            values: vec![0; capacity],
            written: vec![false; capacity],
        }
    }

    /// Current value of `id`. Out-of-range ids read as 0.
    pub fn read(&self, id: VarId) -> i32 {
        self.values.get(id).copied().unwrap_or(0)
    }

    /// Store `value` at `id`. Ids are assigned by the parser, so an
    /// out-of-range id means the tree was not built by it.
    pub fn write(&mut self, id: VarId, value: i32) -> Result<(), String> {
        match self.values.get_mut(id) {
            Some(slot) => {
                *slot = value;
                self.written[id] = true;
                Ok(())
            }
            None => Err(format!(
                "variable id {} is outside the symbol store (capacity {})",
                id,
                self.values.len()
            )),
        }
    }

    /// Whether `id` has been declared or assigned during this run
    pub fn is_written(&self, id: VarId) -> bool {
        self.written.get(id).copied().unwrap_or(false)
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Iterate over `(id, value, written)` for every slot
    pub fn iter(&self) -> impl Iterator<Item = (VarId, i32, bool)> + '_ {
        self.values
            .iter()
            .zip(self.written.iter())
            .enumerate()
            .map(|(id, (&value, &written))| (id, value, written))
    }
}

impl Default for SymbolStore {
    fn default() -> Self {
        Self::new(MAX_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initialized() {
        let store = SymbolStore::new(4);
        assert_eq!(store.capacity(), 4);
        assert!((0..4).all(|id| store.read(id) == 0 && !store.is_written(id)));
    }

    #[test]
    fn test_write_then_read() {
        let mut store = SymbolStore::new(2);
        store.write(1, 42).unwrap();
        assert_eq!(store.read(1), 42);
        assert!(store.is_written(1));
        assert!(!store.is_written(0));
    }

    #[test]
    fn test_out_of_range_read_is_zero() {
        let store = SymbolStore::new(1);
        assert_eq!(store.read(1), 0);
        assert_eq!(store.read(usize::MAX), 0);
    }

    #[test]
    fn test_out_of_range_write_is_rejected() {
        let mut store = SymbolStore::new(1);
        assert!(store.write(1, 5).is_err());
        assert_eq!(store.read(1), 0);
    }

    #[test]
    fn test_capacity_is_clamped() {
        let store = SymbolStore::new(MAX_VARIABLES * 2);
        assert_eq!(store.capacity(), MAX_VARIABLES);
        assert_eq!(SymbolStore::default().capacity(), MAX_VARIABLES);
    }
}
