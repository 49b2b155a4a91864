use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod states;

declare_id!("J6zPF2j9uavaT5h7ftMJBEd1rkvYqGBUNTApznJWYAft");

#[program]
pub mod epoch_distributor {
    use super::*;

    /// Create the distributor, its vault and epoch 0 with `initial_root`.
    pub fn initialize(ctx: Context<Initialize>, initial_root: [u8; 32]) -> Result<()> {
        instructions::initialize::handler(ctx, initial_root)
    }

    /// Rotate to a new funding round: refund the vault's leftover balance,
    /// pull `amount` from the funding source, cancel the current epoch and
    /// install `new_root` as the next one. Authority only.
    pub fn create_epoch(
        ctx: Context<CreateEpoch>,
        amount: u64,
        new_root: [u8; 32],
    ) -> Result<()> {
        instructions::create_epoch::handler(ctx, amount, new_root)
    }

    /// Redeem one allotment of the current epoch. Open to any caller; the
    /// leaf commits to the recipient token account's owner.
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::claim::handler(ctx, index, amount, proof)
    }

    /// Whether `index` was redeemed in epoch `epoch_id`.
    pub fn claimed(ctx: Context<CheckClaimed>, index: u64, epoch_id: u64) -> Result<bool> {
        instructions::claimed::handler(ctx, index, epoch_id)
    }

    /// Block or unblock claims. Authority only.
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::handler(ctx, paused)
    }

    /// Hand the distributor over to `new_authority`. Authority only.
    pub fn transfer_authority(
        ctx: Context<TransferAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_authority)
    }
}
