use serde::{Deserialize, Serialize};

use crate::post::Post;
use crate::user::User;

/// A user's full record paired with their posts.
///
/// Produced by the detail load, which fetches both halves in parallel and
/// fails as a unit if either half fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub user: User,
    pub posts: Vec<Post>,
}

impl UserDetail {
    pub fn new(user: User, posts: Vec<Post>) -> Self {
        Self { user, posts }
    }
}
