//! Generic binary Merkle tree with compact inclusion proofs.
//!
//! Builds a binary hash tree over an ordered sequence of opaque values
//! using a caller-supplied combine function `(left, right) -> parent`.
//! Layers reduce pairwise left-to-right; an odd trailing element is
//! carried up unchanged (no padding, no self-combination):
//!
//! ```text
//! leaves:  A   B   C   D   E
//!           \ /     \ /    |
//!           AB      CD     E
//!             \    /       |
//!              ABCD        E
//!                  \      /
//!                   ABCDE
//! ```
//!
//! # Core types
//!
//! - [`MerkleTree`] — owning handle over a leaf sequence (root, proof).
//! - [`Proof`] / [`ProofStep`] — the ordered sibling path from one leaf to
//!   the root (verify, calculate root, bincode encode/decode).
//! - [`compute_root`] / [`build_proof`] — one-shot free functions over a
//!   leaf slice.
//!
//! Verification is total: a tampered or misdirected proof returns `false`,
//! never an error, since the proof may come from an untrusted party.
//!
//! # Example
//!
//! ```
//! use grovedb_binary_merkle_tree::MerkleTree;
//!
//! let concat = |a: &String, b: &String| format!("{a}{b}");
//! let leaves: Vec<String> = ["A", "B", "C", "D", "E"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let tree = MerkleTree::new(leaves, concat).expect("non-empty leaves");
//! let root = tree.root();
//! assert_eq!(root, "ABCDE");
//!
//! let proof = tree.proof(0).expect("index in range");
//! assert!(proof.verify(&"A".to_string(), &root, concat));
//! assert!(!proof.verify(&"B".to_string(), &root, concat));
//! ```
//!
//! # Features
//!
//! - `blake3` — the [`digest`] module: the conventional domain-separated
//!   Blake3 instantiation for byte-content leaves.
//! - `serde` — `Serialize`/`Deserialize` on [`Proof`] and [`ProofStep`].

#![warn(missing_docs)]

#[cfg(feature = "blake3")]
pub mod digest;
mod error;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use proof::{Proof, ProofStep, build_proof};
pub use tree::{MerkleTree, compute_root};
