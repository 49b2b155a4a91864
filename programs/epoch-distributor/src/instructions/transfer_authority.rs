use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::errors::DistributorError;
use crate::events::AuthorityUpdated;
use crate::states::Distributor;

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump,
        has_one = authority @ DistributorError::Unauthorized
    )]
    pub distributor: Account<'info, Distributor>,

    pub authority: Signer<'info>,
}

// The new authority is stored as given; handing control to an unreachable
// key is the current authority's responsibility.
pub fn handler(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let old_authority = distributor.authority;
    distributor.authority = new_authority;

    let clock = Clock::get()?;
    emit!(AuthorityUpdated {
        distributor: distributor.key(),
        old_authority,
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!("Authority updated: {} -> {}", old_authority, new_authority);

    Ok(())
}
