//! Single-slot memoization cells for the derivation graph.
//!
//! Each derived output of a table view is a pure function of a fixed input
//! tuple. A [`Memo`] remembers the most recent input tuple and its output;
//! a recomputation call whose inputs match the cache by per-input identity
//! returns the cached output unchanged. The cache is one slot deep — not an
//! LRU — which is exactly what a UI derivation layer needs: configuration
//! changes one field at a time and the previous result is the only one
//! worth keeping.

use std::sync::Arc;

use crate::page::PageInfo;
use crate::sort::{SortDirection, SortInfo};

/// Identity check used to decide whether a memoized input changed.
///
/// Shared collections compare by pointer (`Arc::ptr_eq`); scalars and small
/// `Copy` configs compare by value, which for them is the same thing. Deep
/// equality is never used.
pub trait InputKey {
    /// Returns `true` when `other` is the same input.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> InputKey for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: InputKey> InputKey for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! impl_input_key_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl InputKey for $ty {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_input_key_by_eq!(usize, i64, bool, String, PageInfo, SortDirection, SortInfo);

macro_rules! impl_input_key_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: InputKey),+> InputKey for ($($name,)+) {
            fn same(&self, other: &Self) -> bool {
                $(self.$idx.same(&other.$idx))&&+
            }
        }
    };
}

impl_input_key_tuple!(A: 0, B: 1);
impl_input_key_tuple!(A: 0, B: 1, C: 2);
impl_input_key_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_input_key_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);

/// A single-slot cache for one derived output.
pub struct Memo<I, O> {
    slot: Option<(I, O)>,
}

impl<I: InputKey, O: Clone> Memo<I, O> {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached output if `input` matches the cached input tuple
    /// by identity; otherwise run `compute` and replace the slot.
    pub fn get_or_recompute(&mut self, input: I, compute: impl FnOnce(&I) -> O) -> O {
        if let Some((cached, output)) = &self.slot
            && cached.same(&input)
        {
            return output.clone();
        }
        let output = compute(&input);
        self.slot = Some((input, output.clone()));
        output
    }
}

impl<I: InputKey, O: Clone> Default for Memo<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_identity_hits_without_recompute() {
        let mut memo: Memo<Arc<Vec<i64>>, usize> = Memo::new();
        let input = Arc::new(vec![1, 2, 3]);
        let mut calls = 0;
        let out = memo.get_or_recompute(Arc::clone(&input), |v| {
            calls += 1;
            v.len()
        });
        assert_eq!(out, 3);
        let out = memo.get_or_recompute(Arc::clone(&input), |v| {
            calls += 1;
            v.len()
        });
        assert_eq!(out, 3);
        assert_eq!(calls, 1);
    }

    #[test]
    fn equal_but_distinct_arcs_recompute() {
        let mut memo: Memo<Arc<Vec<i64>>, usize> = Memo::new();
        let mut calls = 0;
        memo.get_or_recompute(Arc::new(vec![1]), |v| {
            calls += 1;
            v.len()
        });
        memo.get_or_recompute(Arc::new(vec![1]), |v| {
            calls += 1;
            v.len()
        });
        assert_eq!(calls, 2);
    }

    #[test]
    fn tuple_inputs_check_every_slot() {
        let mut memo: Memo<(Arc<Vec<i64>>, usize), usize> = Memo::new();
        let rows = Arc::new(vec![1, 2]);
        let mut calls = 0;
        memo.get_or_recompute((Arc::clone(&rows), 0), |_| {
            calls += 1;
            0
        });
        memo.get_or_recompute((Arc::clone(&rows), 0), |_| {
            calls += 1;
            0
        });
        assert_eq!(calls, 1);
        memo.get_or_recompute((Arc::clone(&rows), 1), |_| {
            calls += 1;
            0
        });
        assert_eq!(calls, 2);
    }
}
