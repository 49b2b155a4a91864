use anchor_lang::prelude::*;

use crate::errors::DistributorError;
use crate::states::Epoch;

/// Root state for the distribution ledger.
#[account]
pub struct Distributor {
    /// Authority allowed to rotate epochs, pause claims and hand over control
    pub authority: Pubkey,

    /// Mint of the distributed token; fixed at initialization
    pub mint: Pubkey,

    /// Token account holding undistributed funds, owned by this PDA
    pub vault: Pubkey,

    /// Identifier of the current epoch
    pub epoch: u64,

    /// Blocks all claims while set
    pub paused: bool,

    /// Bump seed for PDA signing
    pub bump: u8,
}

impl Distributor {
    pub const LEN: usize = 8 +  // discriminator
        32 +                    // authority
        32 +                    // mint
        32 +                    // vault
        8 +                     // epoch
        1 +                     // paused
        1;                      // bump

    /// Epoch id assigned at initialization.
    pub const FIRST_EPOCH: u64 = 0;

    /// Id the next epoch will receive.
    pub fn next_epoch_id(&self) -> Result<u64> {
        self.epoch
            .checked_add(1)
            .ok_or_else(|| error!(DistributorError::ArithmeticOverflow))
    }

    /// Supersede `current` with the next epoch. Cancellation is one-way,
    /// and the pause flag is cleared so the new epoch starts redeemable.
    pub fn advance_epoch(&mut self, current: &mut Epoch) -> Result<u64> {
        let next = self.next_epoch_id()?;
        current.cancelled = true;
        self.epoch = next;
        self.paused = false;
        Ok(next)
    }
}
