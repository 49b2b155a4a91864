use anchor_lang::prelude::*;

/// Event emitted when the distributor is initialized
#[event]
pub struct DistributorInitialized {
    pub distributor: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub merkle_root: [u8; 32],
    pub timestamp: i64,
}

/// Event emitted when a new epoch is installed
#[event]
pub struct DistributionCreated {
    pub distributor: Pubkey,
    pub epoch: u64,
    pub merkle_root: [u8; 32],
    pub timestamp: i64,
}

/// Event emitted when an allotment is redeemed
#[event]
pub struct Claimed {
    pub distributor: Pubkey,
    pub epoch: u64,
    pub index: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the pause flag changes
#[event]
pub struct PausedSet {
    pub distributor: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

/// Event emitted when authority is handed over
#[event]
pub struct AuthorityUpdated {
    pub distributor: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
