//! Proof verification.
//!
//! Pure function — no tree required. Recomputes a candidate root from the
//! leaf and the proof's sibling path, then compares it to the expected
//! root. Verification is total: a tampered, truncated, or misdirected
//! proof produces a mismatching candidate and an ordinary `false`, never
//! an error, since the proof may come from an untrusted party.

use crate::proof::Proof;

impl<T: Clone> Proof<T> {
    /// Recompute the root this proof leads to when starting from `leaf`.
    ///
    /// Folds the steps leaf-adjacent first: the running value is combined
    /// with each step's sibling on the side the step records. An empty
    /// proof returns the leaf itself (a single-leaf tree is its own root).
    pub fn calculate_root<F>(&self, leaf: &T, combine: F) -> T
    where
        F: Fn(&T, &T) -> T,
    {
        let mut current = leaf.clone();
        for step in self.iter() {
            current = if step.sibling_on_left {
                combine(&step.sibling, &current)
            } else {
                combine(&current, &step.sibling)
            };
        }
        current
    }

    /// Check that this proof links `leaf` to `expected_root` under
    /// `combine`.
    pub fn verify<F>(&self, leaf: &T, expected_root: &T, combine: F) -> bool
    where
        T: PartialEq,
        F: Fn(&T, &T) -> T,
    {
        self.calculate_root(leaf, combine) == *expected_root
    }
}
