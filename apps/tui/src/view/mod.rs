// Derived table views: filter, search, sort, memoize, paginate.

pub mod memo;
pub mod pagination;
pub mod records;
pub mod sort;

pub use memo::{Dataset, ViewMemo};
pub use pagination::{Page, Paginator};
pub use records::{filter_by_type, process, process_indices};
pub use sort::{SortCriteria, SortState};
