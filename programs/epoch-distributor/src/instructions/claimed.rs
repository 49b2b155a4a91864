use anchor_lang::prelude::*;

use crate::constants::BITMAP_SEED;
use crate::states::ClaimWord;

#[derive(Accounts)]
#[instruction(index: u64, epoch_id: u64)]
pub struct CheckClaimed<'info> {
    /// Bitmap word for (epoch_id, index). Absent when nothing in that
    /// index range was ever claimed, which reads as "not claimed".
    #[account(
        seeds = [
            BITMAP_SEED,
            epoch_id.to_le_bytes().as_ref(),
            ClaimWord::word_index(index).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub bitmap_word: Option<Account<'info, ClaimWord>>,
}

pub fn handler(ctx: Context<CheckClaimed>, index: u64, _epoch_id: u64) -> Result<bool> {
    Ok(ctx
        .accounts
        .bitmap_word
        .as_ref()
        .map_or(false, |word| word.is_claimed(index)))
}
