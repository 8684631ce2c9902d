//! In-memory directory source with per-resource failure injection.
//!
//! Stands in for the HTTP source wherever a test needs deterministic data
//! or a controlled failure, including the fail-fast detail-load scenarios.

use async_trait::async_trait;
use rolodex_api::{DirectorySource, Error, Resource, Result};
use rolodex_types::{Comment, Post, PostId, User, UserId};

use crate::fixtures::{sample_comments, sample_posts, sample_users};

/// Fixture-backed `DirectorySource`.
///
/// Starts with the sample data set; builder methods reshape it or arm a
/// failure for one resource kind. Injected failures surface as HTTP 500s.
pub struct FixtureDirectory {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    fail_users: bool,
    fail_user: bool,
    fail_posts: bool,
    fail_comments: bool,
}

impl FixtureDirectory {
    pub fn new() -> Self {
        let users = sample_users();
        let posts: Vec<Post> = users.iter().flat_map(|u| sample_posts(u.id)).collect();
        let comments: Vec<Comment> = posts.iter().flat_map(|p| sample_comments(p.id)).collect();
        Self {
            users,
            posts,
            comments,
            fail_users: false,
            fail_user: false,
            fail_posts: false,
            fail_comments: false,
        }
    }

    /// A directory with no users at all (the empty-state scenario).
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            ..Self::new()
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.posts = users.iter().flat_map(|u| sample_posts(u.id)).collect();
        self.comments = self.posts.iter().flat_map(|p| sample_comments(p.id)).collect();
        self.users = users;
        self
    }

    pub fn failing_users(mut self) -> Self {
        self.fail_users = true;
        self
    }

    pub fn failing_user(mut self) -> Self {
        self.fail_user = true;
        self
    }

    pub fn failing_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }
}

impl Default for FixtureDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(resource: Resource) -> Error {
    Error::Status {
        resource,
        status: 500,
    }
}

#[async_trait]
impl DirectorySource for FixtureDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        if self.fail_users {
            return Err(injected(Resource::Users));
        }
        Ok(self.users.clone())
    }

    async fn fetch_user(&self, id: UserId) -> Result<User> {
        if self.fail_user {
            return Err(injected(Resource::User(id)));
        }
        // The upstream API answers 404 for ids it never assigned.
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(Error::Status {
                resource: Resource::User(id),
                status: 404,
            })
    }

    async fn fetch_user_posts(&self, id: UserId) -> Result<Vec<Post>> {
        if self.fail_posts {
            return Err(injected(Resource::UserPosts(id)));
        }
        Ok(self
            .posts
            .iter()
            .filter(|p| p.user_id == id)
            .cloned()
            .collect())
    }

    async fn fetch_post_comments(&self, id: PostId) -> Result<Vec<Comment>> {
        if self.fail_comments {
            return Err(injected(Resource::PostComments(id)));
        }
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_serves_sample_data() {
        let source = FixtureDirectory::new();
        let users = source.fetch_users().await.unwrap();
        assert_eq!(users.len(), 5);

        let id = users[0].id;
        let user = source.fetch_user(id).await.unwrap();
        assert_eq!(user.name, "Leanne Graham");

        let posts = source.fetch_user_posts(id).await.unwrap();
        assert_eq!(posts.len(), 3);

        let comments = source.fetch_post_comments(posts[0].id).await.unwrap();
        assert_eq!(comments.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_user_is_a_404() {
        let source = FixtureDirectory::new();
        let missing = UserId::new(99).unwrap();
        let err = source.fetch_user(missing).await.unwrap_err();
        assert_eq!(
            err,
            Error::Status {
                resource: Resource::User(missing),
                status: 404,
            }
        );
    }

    #[tokio::test]
    async fn test_injected_failures_hit_one_resource_only() {
        let source = FixtureDirectory::new().failing_posts();
        let id = UserId::new(1).unwrap();

        assert!(source.fetch_user(id).await.is_ok());
        let err = source.fetch_user_posts(id).await.unwrap_err();
        assert_eq!(err.resource(), Resource::UserPosts(id));
    }
}
