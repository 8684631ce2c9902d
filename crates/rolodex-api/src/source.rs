use async_trait::async_trait;
use rolodex_types::{Comment, Post, PostId, User, UserId};

use crate::error::Result;

/// Read-only access to a user directory.
///
/// Responsibilities:
/// - Fetch the full user collection and single users by id
/// - Fetch a user's posts and a post's comments on demand
///
/// Each call is independent and has no side effects beyond the round trip:
/// no retries, no caching. Implementations are shared behind an `Arc` for
/// the lifetime of a command, so they must be `Send + Sync`.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the complete user collection.
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// Fetch a single user by id.
    async fn fetch_user(&self, id: UserId) -> Result<User>;

    /// Fetch all posts authored by the given user.
    async fn fetch_user_posts(&self, id: UserId) -> Result<Vec<Post>>;

    /// Fetch all comments on the given post.
    ///
    /// Unused by the interactive flows; exposed for library consumers.
    async fn fetch_post_comments(&self, id: PostId) -> Result<Vec<Comment>>;
}
