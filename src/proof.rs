//! Inclusion proof generation and transport.
//!
//! A [`Proof`] is the ordered sibling path from one leaf up to the root:
//! for each layer where the target element had a sibling, one
//! [`ProofStep`] records the sibling's value and which side it combines
//! on. Layers where the target was the odd trailing element contribute no
//! step.
//!
//! Step order is significant and is preserved by the bincode encoding, so
//! a decoded proof verifies exactly like the original.

use bincode::{Decode, Encode};

use crate::{Error, Result, tree::next_layer};

/// One step of an inclusion proof: the sibling encountered at one layer on
/// the way from the leaf to the root.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofStep<T> {
    /// The sibling value combined with the running value at this layer.
    pub sibling: T,
    /// Whether the sibling is the left operand of the combine; otherwise
    /// it is the right operand.
    pub sibling_on_left: bool,
}

/// An inclusion proof: the ordered sibling path from one leaf to the root.
///
/// Steps are ordered leaf-adjacent first. A proof over `n` leaves has at
/// most `ceil(log2(n))` steps; a single-leaf tree has an empty proof.
///
/// Produced by [`build_proof`] or [`MerkleTree::proof`](crate::MerkleTree::proof),
/// checked with [`Proof::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof<T> {
    steps: Vec<ProofStep<T>>,
}

impl<T> Proof<T> {
    /// Construct a proof from pre-computed steps, e.g. after receiving
    /// them over the wire in some other encoding.
    pub fn new(steps: Vec<ProofStep<T>>) -> Self {
        Proof { steps }
    }

    /// The proof steps, leaf-adjacent first.
    pub fn steps(&self) -> &[ProofStep<T>] {
        &self.steps
    }

    /// Number of steps, at most `ceil(log2(leaf_count))`.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for the empty proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps, leaf-adjacent first.
    pub fn iter(&self) -> core::slice::Iter<'_, ProofStep<T>> {
        self.steps.iter()
    }

    /// Consume the proof and return its steps.
    pub fn into_steps(self) -> Vec<ProofStep<T>> {
        self.steps
    }
}

impl<T: Encode> Proof<T> {
    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| Error::InvalidEncoding(format!("encode error: {}", e)))
    }
}

impl<T: Decode<()>> Proof<T> {
    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 100 * 1024 * 1024 }>(); // 100MB limit
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| Error::InvalidEncoding(format!("decode error: {}", e)))?;
        Ok(proof)
    }
}

/// Generate an inclusion proof for the leaf at `index`.
///
/// Runs the same layer reduction as [`compute_root`](crate::compute_root),
/// tracking the target's position as it halves with each layer. At each
/// layer the target's sibling (position `pos ^ 1`) and its side are
/// recorded; when the target is the odd trailing element it has no sibling
/// and the layer contributes no step.
///
/// Returns [`Error::EmptyLeaves`] if `leaves` is empty and
/// [`Error::IndexOutOfRange`] if `index >= leaves.len()`.
pub fn build_proof<T, F>(leaves: &[T], index: usize, combine: F) -> Result<Proof<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    if leaves.is_empty() {
        return Err(Error::EmptyLeaves);
    }
    if index >= leaves.len() {
        return Err(Error::IndexOutOfRange {
            index,
            leaf_count: leaves.len(),
        });
    }

    let mut steps = Vec::new();
    let mut layer = leaves.to_vec();
    let mut pos = index;
    while layer.len() > 1 {
        let sibling = pos ^ 1;
        if sibling < layer.len() {
            steps.push(ProofStep {
                sibling: layer[sibling].clone(),
                sibling_on_left: pos % 2 == 1,
            });
        }
        // a carried trailing element has no sibling here, but its
        // position still halves with the layer
        pos /= 2;
        layer = next_layer(&layer, &combine);
    }

    Ok(Proof::new(steps))
}
