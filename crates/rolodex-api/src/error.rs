use std::fmt;

use rolodex_types::{PostId, UserId};

/// Result type for rolodex-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// The resource a request was after, carried in every error so callers can
/// name what failed without inspecting the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    User(UserId),
    UserPosts(UserId),
    PostComments(PostId),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Users => write!(f, "users"),
            Resource::User(id) => write!(f, "user {}", id),
            Resource::UserPosts(id) => write!(f, "posts for user {}", id),
            Resource::PostComments(id) => write!(f, "comments for post {}", id),
        }
    }
}

/// Error types that can occur in the data access layer.
///
/// All variants are recoverable; nothing here aborts the process. Callers
/// decide between re-raising (library paths) and rendering a message
/// (top-level handlers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Request never produced a response (DNS, connect, timeout)
    Transport { resource: Resource, message: String },
    /// Server answered with a non-success status
    Status { resource: Resource, status: u16 },
    /// Response body was not the expected JSON shape
    Decode { resource: Resource, message: String },
}

impl Error {
    pub fn resource(&self) -> Resource {
        match self {
            Error::Transport { resource, .. }
            | Error::Status { resource, .. }
            | Error::Decode { resource, .. } => *resource,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { resource, message } => {
                write!(f, "failed to fetch {}: {}", resource, message)
            }
            Error::Status { resource, status } => {
                write!(f, "failed to fetch {}: HTTP status {}", resource, status)
            }
            Error::Decode { resource, message } => {
                write!(f, "failed to decode {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_resource_and_id() {
        let id = UserId::new(3).unwrap();
        let err = Error::Status {
            resource: Resource::UserPosts(id),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch posts for user 3: HTTP status 500"
        );
        assert_eq!(err.resource(), Resource::UserPosts(id));
    }

    #[test]
    fn test_resource_display_covers_all_endpoints() {
        let user = UserId::new(7).unwrap();
        let post = PostId::new(11).unwrap();
        assert_eq!(Resource::Users.to_string(), "users");
        assert_eq!(Resource::User(user).to_string(), "user 7");
        assert_eq!(Resource::PostComments(post).to_string(), "comments for post 11");
    }
}
