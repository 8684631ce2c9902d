use serde::{Deserialize, Serialize};

use crate::id::{PostId, UserId};

/// A post authored by a directory member.
///
/// Fetched on demand for the detail view; never cached past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub id: PostId,
    pub title: String,
    pub body: String,
}
