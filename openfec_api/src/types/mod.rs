mod meta;
pub use self::meta::{PaginatedResponse, Pagination};

mod totals;
pub use self::totals::CommitteeTotals;
