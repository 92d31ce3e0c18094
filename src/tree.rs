//! Root computation and the owning tree handle.
//!
//! The tree is never materialized as a node graph. Every call reduces the
//! leaf layer bottom-up: consecutive pairs are combined left-to-right and
//! an odd trailing element is carried up unchanged, until a single element
//! remains.
//!
//! ```text
//! leaves:  A   B   C   D   E
//!           \ /     \ /    |
//!           AB      CD     E      (E carried, no combine)
//!             \    /       |
//!              ABCD        E      (E carried again)
//!                  \      /
//!                   ABCDE
//! ```

use crate::{Error, Proof, Result};

/// Reduce one layer to the next: combine consecutive pairs, carry an odd
/// trailing element up unchanged.
pub(crate) fn next_layer<T, F>(layer: &[T], combine: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    layer
        .chunks(2)
        .map(|pair| {
            if let [left, right] = pair {
                combine(left, right)
            } else {
                // trailing element with no sibling
                pair[0].clone()
            }
        })
        .collect()
}

/// Reduce a non-empty leaf slice all the way to its root.
pub(crate) fn reduce_root<T, F>(leaves: &[T], combine: &F) -> T
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    debug_assert!(!leaves.is_empty());
    let mut layer = leaves.to_vec();
    while layer.len() > 1 {
        layer = next_layer(&layer, combine);
    }
    layer.swap_remove(0)
}

/// Compute the Merkle root of `leaves` under `combine`.
///
/// Combines consecutive pairs layer by layer until a single element
/// remains. An odd trailing element at any layer is carried up unchanged;
/// there is no padding and no self-combination. A single leaf is its own
/// root.
///
/// `combine` must be deterministic; it is treated as order-sensitive
/// (`combine(a, b)` need not equal `combine(b, a)`).
///
/// Returns [`Error::EmptyLeaves`] if `leaves` is empty.
pub fn compute_root<T, F>(leaves: &[T], combine: F) -> Result<T>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    if leaves.is_empty() {
        return Err(Error::EmptyLeaves);
    }
    Ok(reduce_root(leaves, &combine))
}

/// An ordered leaf sequence paired with its combine function.
///
/// Owns the leaves for repeated root and proof computation. Nothing is
/// cached between calls: each one reduces the leaf layer from scratch, so
/// the handle has no interior mutability and is `Send`/`Sync` whenever its
/// leaf and combine types are.
#[derive(Debug, Clone)]
pub struct MerkleTree<T, F> {
    leaves: Vec<T>,
    combine: F,
}

impl<T, F> MerkleTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Create a tree over `leaves`.
    ///
    /// Returns [`Error::EmptyLeaves`] if `leaves` is empty, so a
    /// constructed tree always has a root.
    pub fn new(leaves: Vec<T>, combine: F) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyLeaves);
        }
        Ok(MerkleTree { leaves, combine })
    }

    /// The Merkle root of the leaves.
    ///
    /// Infallible: non-emptiness is checked at construction.
    pub fn root(&self) -> T {
        reduce_root(&self.leaves, &self.combine)
    }

    /// Generate an inclusion proof for the leaf at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= leaf_count()`.
    pub fn proof(&self, index: usize) -> Result<Proof<T>> {
        crate::proof::build_proof(&self.leaves, index, &self.combine)
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// The leaf values, in their original order.
    pub fn leaves(&self) -> &[T] {
        &self.leaves
    }
}
