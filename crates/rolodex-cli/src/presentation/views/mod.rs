pub mod directory;

pub use directory::{CompanyListView, UserDetailView, UserListView};
