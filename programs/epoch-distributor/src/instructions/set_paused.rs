use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::errors::DistributorError;
use crate::events::PausedSet;
use crate::states::Distributor;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump,
        has_one = authority @ DistributorError::Unauthorized
    )]
    pub distributor: Account<'info, Distributor>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.paused = paused;

    let clock = Clock::get()?;
    emit!(PausedSet {
        distributor: distributor.key(),
        paused,
        timestamp: clock.unix_timestamp,
    });

    msg!("Paused set to {}", paused);

    Ok(())
}
