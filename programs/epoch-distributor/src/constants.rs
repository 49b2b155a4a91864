/// Program constants for the epoch distributor

/// PDA seed for the distributor account
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";

/// PDA seed for per-epoch records
pub const EPOCH_SEED: &[u8] = b"epoch";

/// PDA seed for claim bitmap words
pub const BITMAP_SEED: &[u8] = b"bitmap";

/// PDA seed for the token vault
pub const VAULT_SEED: &[u8] = b"vault";

/// Indices tracked per bitmap word account
pub const BITMAP_WORD_BITS: u64 = 256;
