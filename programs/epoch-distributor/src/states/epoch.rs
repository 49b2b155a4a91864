use anchor_lang::prelude::*;

/// One funding round: an immutable Merkle root plus a one-way
/// cancellation flag. Epoch records are append-only; a superseded
/// epoch keeps its root and bitmap for audit but can never be
/// claimed against again.
#[account]
pub struct Epoch {
    /// Identifier, assigned in strictly increasing order from 0
    pub id: u64,

    /// Commitment over this round's (index, recipient, amount) set
    pub merkle_root: [u8; 32],

    /// Set when the epoch is superseded; never cleared
    pub cancelled: bool,

    /// Bump seed for PDA verification
    pub bump: u8,
}

impl Epoch {
    pub const LEN: usize = 8 +  // discriminator
        8 +                     // id
        32 +                    // merkle_root
        1 +                     // cancelled
        1;                      // bump
}
