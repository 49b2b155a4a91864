use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DISTRIBUTOR_SEED, EPOCH_SEED, VAULT_SEED};
use crate::events::DistributorInitialized;
use crate::states::{Distributor, Epoch};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Distributor::LEN,
        seeds = [DISTRIBUTOR_SEED],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    // Epoch 0 is live immediately with the initial root
    #[account(
        init,
        payer = authority,
        space = Epoch::LEN,
        seeds = [EPOCH_SEED, Distributor::FIRST_EPOCH.to_le_bytes().as_ref()],
        bump
    )]
    pub epoch: Account<'info, Epoch>,

    /// Mint of the distributed token
    pub mint: Account<'info, Mint>,

    // Vault holding undistributed funds, spendable only by the distributor PDA
    #[account(
        init,
        payer = authority,
        seeds = [VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = distributor
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, initial_root: [u8; 32]) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.authority = ctx.accounts.authority.key();
    distributor.mint = ctx.accounts.mint.key();
    distributor.vault = ctx.accounts.vault.key();
    distributor.epoch = Distributor::FIRST_EPOCH;
    distributor.paused = false;
    distributor.bump = ctx.bumps.distributor;

    let epoch = &mut ctx.accounts.epoch;
    epoch.id = Distributor::FIRST_EPOCH;
    epoch.merkle_root = initial_root;
    epoch.cancelled = false;
    epoch.bump = ctx.bumps.epoch;

    let clock = Clock::get()?;
    emit!(DistributorInitialized {
        distributor: distributor.key(),
        authority: distributor.authority,
        mint: distributor.mint,
        vault: distributor.vault,
        merkle_root: initial_root,
        timestamp: clock.unix_timestamp,
    });

    msg!("Distributor initialized, epoch 0 root: {:?}", initial_root);

    Ok(())
}
