use rolodex_types::{UserDetail, UserId};

use crate::error::Result;
use crate::source::DirectorySource;

/// Fetch a user's full record and their posts in parallel.
///
/// The two requests are independent but the load is all-or-nothing: the
/// first failure wins and no partial detail is produced.
pub async fn load_detail(source: &dyn DirectorySource, id: UserId) -> Result<UserDetail> {
    let (user, posts) = tokio::try_join!(source.fetch_user(id), source.fetch_user_posts(id))?;
    Ok(UserDetail::new(user, posts))
}
