pub mod claim;
pub mod claimed;
pub mod create_epoch;
pub mod initialize;
pub mod set_paused;
pub mod transfer_authority;

pub use claim::*;
pub use claimed::*;
pub use create_epoch::*;
pub use initialize::*;
pub use set_paused::*;
pub use transfer_authority::*;
