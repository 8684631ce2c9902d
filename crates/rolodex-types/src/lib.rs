pub mod comment;
pub mod detail;
pub mod id;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use detail::UserDetail;
pub use id::{PostId, UserId};
pub use post::Post;
pub use user::{Address, Company, Geo, User};
