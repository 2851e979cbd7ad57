mod ledger;
mod money;
mod split;
mod transaction;

pub use ledger::*;
pub use money::*;
pub use split::*;
pub use transaction::*;
