use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, EPOCH_SEED};
use crate::errors::DistributorError;
use crate::events::DistributionCreated;
use crate::states::{Distributor, Epoch};

#[derive(Accounts)]
pub struct CreateEpoch<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump,
        has_one = authority @ DistributorError::Unauthorized,
        has_one = vault @ DistributorError::VaultMismatch
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        mut,
        seeds = [EPOCH_SEED, distributor.epoch.to_le_bytes().as_ref()],
        bump = current_epoch.bump
    )]
    pub current_epoch: Account<'info, Epoch>,

    #[account(
        init,
        payer = authority,
        space = Epoch::LEN,
        seeds = [EPOCH_SEED, (distributor.epoch + 1).to_le_bytes().as_ref()],
        bump
    )]
    pub next_epoch: Account<'info, Epoch>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Receives whatever the previous round left unclaimed
    #[account(mut, token::mint = distributor.mint)]
    pub refund_target: Account<'info, TokenAccount>,

    /// Source of the new round's funds; must be spendable by the authority
    #[account(mut, token::mint = distributor.mint)]
    pub funding_source: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateEpoch>, amount: u64, new_root: [u8; 32]) -> Result<()> {
    // Refund the full leftover balance before pulling in the new round, so
    // the authority can roll stale funds over or recover them.
    let leftover = ctx.accounts.vault.amount;
    if leftover > 0 {
        let bump = ctx.accounts.distributor.bump;
        let seeds: &[&[u8]] = &[DISTRIBUTOR_SEED, &[bump]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.refund_target.to_account_info(),
                    authority: ctx.accounts.distributor.to_account_info(),
                },
                &[seeds],
            ),
            leftover,
        )?;
    }

    if amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.funding_source.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    let distributor = &mut ctx.accounts.distributor;
    let new_epoch_id = distributor.advance_epoch(&mut ctx.accounts.current_epoch)?;

    let next_epoch = &mut ctx.accounts.next_epoch;
    next_epoch.id = new_epoch_id;
    next_epoch.merkle_root = new_root;
    next_epoch.cancelled = false;
    next_epoch.bump = ctx.bumps.next_epoch;

    let clock = Clock::get()?;
    emit!(DistributionCreated {
        distributor: distributor.key(),
        epoch: new_epoch_id,
        merkle_root: new_root,
        timestamp: clock.unix_timestamp,
    });

    msg!("Epoch {} created with root: {:?}", new_epoch_id, new_root);

    Ok(())
}
