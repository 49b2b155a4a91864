use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{BITMAP_SEED, DISTRIBUTOR_SEED, EPOCH_SEED};
use crate::errors::DistributorError;
use crate::events::Claimed;
use crate::merkle::{claim_leaf, verify_proof};
use crate::states::{ClaimWord, Distributor, Epoch};

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct Claim<'info> {
    #[account(
        seeds = [DISTRIBUTOR_SEED],
        bump = distributor.bump,
        has_one = vault @ DistributorError::VaultMismatch
    )]
    pub distributor: Account<'info, Distributor>,

    // The epoch PDA is derived from the live counter, so claims can only
    // ever target the current epoch; superseded roots are unreachable.
    #[account(
        seeds = [EPOCH_SEED, distributor.epoch.to_le_bytes().as_ref()],
        bump = epoch.bump
    )]
    pub epoch: Account<'info, Epoch>,

    // Bitmap words are allocated on first touch of their index range
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimWord::LEN,
        seeds = [
            BITMAP_SEED,
            distributor.epoch.to_le_bytes().as_ref(),
            ClaimWord::word_index(index).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub bitmap_word: Account<'info, ClaimWord>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Token account receiving the allotment; the leaf commits to its owner
    #[account(mut, token::mint = distributor.mint)]
    pub recipient: Account<'info, TokenAccount>,

    // Anyone may submit a claim; the payer just funds the bitmap word
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Claim>, index: u64, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let recipient_owner = ctx.accounts.recipient.owner;
    validate_claim(
        &ctx.accounts.distributor,
        &ctx.accounts.epoch,
        &ctx.accounts.bitmap_word,
        index,
        &recipient_owner,
        amount,
        &proof,
    )?;

    // Flip the bit before the outbound transfer so a reentrant transfer
    // hook cannot redeem the same index twice. A failed transfer aborts
    // the transaction and the bit is rolled back with it.
    ctx.accounts.bitmap_word.set_claimed(index);

    let bump = ctx.accounts.distributor.bump;
    let seeds: &[&[u8]] = &[DISTRIBUTOR_SEED, &[bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
                authority: ctx.accounts.distributor.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )?;

    let clock = Clock::get()?;
    emit!(Claimed {
        distributor: ctx.accounts.distributor.key(),
        epoch: ctx.accounts.epoch.id,
        index,
        recipient: recipient_owner,
        amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Claimed index {} for {} ({} tokens)",
        index,
        recipient_owner,
        amount
    );

    Ok(())
}

/// Gate a redemption against the ledger state. Check order matters: a
/// replayed index must fail as already claimed whether or not its proof
/// still verifies.
fn validate_claim(
    distributor: &Distributor,
    epoch: &Epoch,
    bitmap_word: &ClaimWord,
    index: u64,
    recipient: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
) -> Result<()> {
    require!(!distributor.paused, DistributorError::Paused);
    require!(!bitmap_word.is_claimed(index), DistributorError::AlreadyClaimed);
    require!(!epoch.cancelled, DistributorError::EpochCancelled);

    let leaf = claim_leaf(index, recipient, amount);
    require!(
        verify_proof(leaf, proof, epoch.merkle_root, index),
        DistributorError::InvalidProof
    );

    Ok(())
}
