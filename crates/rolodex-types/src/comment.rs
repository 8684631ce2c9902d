use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// A comment attached to a post.
///
/// Reachable through the library API only; the interactive flows stop at
/// posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
