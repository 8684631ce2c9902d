mod detail;
mod user_list;

pub(crate) use detail::DetailComponent;
pub(crate) use user_list::UserListComponent;
