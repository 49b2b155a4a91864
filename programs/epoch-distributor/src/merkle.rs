use solana_program::keccak::hashv;
use solana_program::pubkey::Pubkey;

/// Compute the commitment leaf for one allotment.
///
/// Leaf = keccak256(index (8 bytes LE) || recipient (32 bytes) || amount (8 bytes LE)),
/// a tight concatenation with no padding between fields.
pub fn claim_leaf(index: u64, recipient: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        recipient.as_ref(),
        &amount.to_le_bytes(),
    ])
    .0
}

/// Verify an inclusion proof against `root`.
///
/// Pairing is positional, not sorted: at each level the low bit of `index`
/// decides whether the running hash is the left or the right operand, and
/// `index` shifts right once per level. Proofs must come from a tree built
/// with the same convention, with a lone last node paired with itself.
pub fn verify_proof(leaf: [u8; 32], proof: &[[u8; 32]], root: [u8; 32], index: u64) -> bool {
    let mut computed = leaf;
    let mut idx = index;
    for sibling in proof {
        computed = if idx & 1 == 0 {
            hashv(&[&computed, sibling]).0
        } else {
            hashv(&[sibling, &computed]).0
        };
        idx >>= 1;
    }
    computed == root
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn sample_leaves(count: u64) -> Vec<[u8; 32]> {
        (0..count)
            .map(|i| claim_leaf(i, &Pubkey::new_unique(), 100 + i))
            .collect()
    }

    #[test]
    fn leaf_is_tight_concatenation() {
        let recipient = Pubkey::new_unique();
        let mut packed = Vec::with_capacity(48);
        packed.extend_from_slice(&7u64.to_le_bytes());
        packed.extend_from_slice(recipient.as_ref());
        packed.extend_from_slice(&500u64.to_le_bytes());
        assert_eq!(packed.len(), 48);
        assert_eq!(claim_leaf(7, &recipient, 500), hashv(&[&packed]).0);
    }

    #[test]
    fn leaf_field_order_matters() {
        let recipient = Pubkey::new_unique();
        assert_ne!(claim_leaf(1, &recipient, 2), claim_leaf(2, &recipient, 1));
    }

    #[test]
    fn single_leaf_verifies_with_empty_proof() {
        let leaf = claim_leaf(0, &Pubkey::new_unique(), 10);
        assert!(verify_proof(leaf, &[], leaf, 0));
    }

    #[test]
    fn all_leaves_of_even_tree_verify() {
        let leaves = sample_leaves(8);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        for (i, leaf) in leaves.iter().enumerate() {
            let proof = proof_for(&levels, i);
            assert_eq!(proof.len(), 3);
            assert!(verify_proof(*leaf, &proof, root, i as u64));
        }
    }

    #[test]
    fn all_leaves_of_odd_tree_verify() {
        let leaves = sample_leaves(5);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        for (i, leaf) in leaves.iter().enumerate() {
            assert!(verify_proof(*leaf, &proof_for(&levels, i), root, i as u64));
        }
    }

    #[test]
    fn wrong_index_position_fails() {
        let leaves = sample_leaves(4);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        let proof = proof_for(&levels, 2);
        assert!(verify_proof(leaves[2], &proof, root, 2));
        // Same leaf and siblings, but the pairing order flips.
        assert!(!verify_proof(leaves[2], &proof, root, 3));
    }

    #[test]
    fn reordered_proof_fails() {
        let leaves = sample_leaves(8);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        let mut proof = proof_for(&levels, 1);
        proof.reverse();
        assert!(!verify_proof(leaves[1], &proof, root, 1));
    }

    #[test]
    fn tampered_sibling_fails() {
        let leaves = sample_leaves(4);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        let mut proof = proof_for(&levels, 0);
        proof[0][0] ^= 1;
        assert!(!verify_proof(leaves[0], &proof, root, 0));
    }

    #[test]
    fn truncated_proof_fails() {
        let leaves = sample_leaves(4);
        let levels = build_levels(&leaves);
        let root = root_of(&levels);
        let mut proof = proof_for(&levels, 0);
        proof.pop();
        assert!(!verify_proof(leaves[0], &proof, root, 0));
    }

    #[test]
    fn foreign_root_fails() {
        let leaves = sample_leaves(4);
        let levels = build_levels(&leaves);
        let other = root_of(&build_levels(&sample_leaves(4)));
        assert!(!verify_proof(leaves[0], &proof_for(&levels, 0), other, 0));
    }

    #[test]
    fn sorted_pair_proofs_do_not_verify() {
        // A builder that sorts each hash pair commits to a different root,
        // so its proofs must be rejected wholesale. Leaves are fixed and
        // out of order so the two conventions cannot coincide.
        let leaves: Vec<[u8; 32]> = vec![[3u8; 32], [1u8; 32], [0u8; 32], [2u8; 32]];
        let mut level = leaves.clone();
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| {
                    let (a, b) = (pair[0], *pair.get(1).unwrap_or(&pair[0]));
                    if a <= b {
                        hashv(&[&a, &b]).0
                    } else {
                        hashv(&[&b, &a]).0
                    }
                })
                .collect();
        }
        let sorted_root = level[0];
        let levels = build_levels(&leaves);
        let positional_root = root_of(&levels);
        assert_ne!(sorted_root, positional_root);
        assert!(!verify_proof(leaves[0], &proof_for(&levels, 0), sorted_root, 0));
    }
}
