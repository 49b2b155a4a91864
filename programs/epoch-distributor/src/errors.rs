use anchor_lang::prelude::*;

#[error_code]
pub enum DistributorError {
    #[msg("Unauthorized - signer is not the distributor authority")]
    Unauthorized,

    #[msg("Claims are paused")]
    Paused,

    #[msg("This index has already been claimed")]
    AlreadyClaimed,

    #[msg("The current epoch has been cancelled")]
    EpochCancelled,

    #[msg("Invalid Merkle proof provided")]
    InvalidProof,

    #[msg("Vault mismatch - provided vault does not match distributor vault")]
    VaultMismatch,

    #[msg("Epoch counter exhausted")]
    ArithmeticOverflow,
}
