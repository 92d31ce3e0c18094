//! Blake3 digest helpers for byte-content leaves (requires the `blake3`
//! feature).
//!
//! The tree core is value-agnostic; this module is the conventional digest
//! instantiation with hash domain separation:
//! - leaf digests:     `blake3(0x00 || value)`
//! - internal combine: `blake3(0x01 || left || right)`
//!
//! The 0x00/0x01 domain tags prevent second-preimage attacks where a
//! crafted leaf value could produce the same digest as an internal
//! combine.

/// Domain tag prepended to leaf digest inputs: `blake3(LEAF_TAG || value)`.
const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to combine inputs: `blake3(INTERNAL_TAG || left ||
/// right)`.
const INTERNAL_TAG: u8 = 0x01;

/// A 32-byte Blake3 digest, the leaf type for digest-based trees.
pub type Digest = [u8; 32];

/// Compute the domain-separated leaf digest: `blake3(0x00 || value)`.
pub fn leaf_digest(value: &[u8]) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[LEAF_TAG]);
    hasher.update(value);
    *hasher.finalize().as_bytes()
}

/// Combine two digests with domain separation: `blake3(0x01 || left ||
/// right)`.
///
/// The signature matches the combine parameter of the tree operations, so
/// this function can be passed to them directly.
pub fn combine_digests(left: &Digest, right: &Digest) -> Digest {
    let mut input = [0u8; 65];
    input[0] = INTERNAL_TAG;
    input[1..33].copy_from_slice(left);
    input[33..65].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_proof, compute_root};

    #[test]
    fn test_leaf_digest_uses_domain_tag() {
        // leaf digest is blake3(0x00 || value), not plain blake3(value)
        let value = b"test value";

        let mut hasher = blake3::Hasher::new();
        hasher.update(&[0x00]);
        hasher.update(value);
        let expected = *hasher.finalize().as_bytes();

        assert_eq!(
            leaf_digest(value),
            expected,
            "leaf digest should use 0x00 domain tag"
        );

        let plain = *blake3::hash(value).as_bytes();
        assert_ne!(
            leaf_digest(value),
            plain,
            "leaf digest must differ from plain blake3(value)"
        );
    }

    #[test]
    fn test_combine_uses_domain_tag() {
        // combine is blake3(0x01 || left || right), not blake3(left || right)
        let left = [0xAAu8; 32];
        let right = [0xBBu8; 32];
        let combined = combine_digests(&left, &right);

        let mut input = [0u8; 65];
        input[0] = 0x01;
        input[1..33].copy_from_slice(&left);
        input[33..65].copy_from_slice(&right);
        let expected = *blake3::hash(&input).as_bytes();

        assert_eq!(combined, expected, "combine should use 0x01 domain tag");

        let mut plain_input = [0u8; 64];
        plain_input[..32].copy_from_slice(&left);
        plain_input[32..].copy_from_slice(&right);
        let plain = *blake3::hash(&plain_input).as_bytes();
        assert_ne!(
            combined, plain,
            "combine must differ from plain blake3(left || right)"
        );
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let left = leaf_digest(b"left");
        let right = leaf_digest(b"right");
        assert_ne!(
            combine_digests(&left, &right),
            combine_digests(&right, &left)
        );
    }

    #[test]
    fn test_digest_tree_proof_round_trip() {
        let leaves: Vec<Digest> = (0u32..11).map(|i| leaf_digest(&i.to_le_bytes())).collect();
        let root = compute_root(&leaves, combine_digests).expect("non-empty leaves");
        for (index, leaf) in leaves.iter().enumerate() {
            let proof = build_proof(&leaves, index, combine_digests).expect("index in range");
            assert!(
                proof.verify(leaf, &root, combine_digests),
                "digest proof for index {} should verify",
                index
            );
        }
    }

    #[test]
    fn test_digest_root_hex_stable() {
        // pin the digest encoding: 32 bytes, hex round-trippable
        let leaves: Vec<Digest> = (0u32..4).map(|i| leaf_digest(&i.to_le_bytes())).collect();
        let root = compute_root(&leaves, combine_digests).expect("non-empty leaves");
        let hex_root = faster_hex::hex_string(&root);
        assert_eq!(hex_root.len(), 64, "root digest should be 32 bytes hex");
        assert_eq!(
            root,
            compute_root(&leaves, combine_digests).expect("non-empty leaves")
        );
    }
}
