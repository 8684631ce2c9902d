pub mod filter;
pub mod sort;
pub mod state;
pub mod term;
pub mod view;

pub use filter::CompanyFilter;
pub use sort::{SortDirection, SortKey, SortSpec, cycle_sort, sort_users};
pub use state::{DetailPhase, DirectoryState, LoadPhase};
pub use term::SearchTerm;
pub use view::{DirectoryQuery, apply, unique_companies};
