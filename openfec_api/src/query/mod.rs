mod common;
pub use self::common::Query;

mod totals;
pub use self::totals::{election_cycle, TotalsQuery};
