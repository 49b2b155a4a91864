pub mod bitmap;
pub mod distributor;
pub mod epoch;

pub use bitmap::*;
pub use distributor::*;
pub use epoch::*;
