/**
 * Post Types
 *
 * The post record, its embedded like entries, and the request/response
 * types for the post routes.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::HasId;

/// One like on a post.
///
/// Keyed by the liking user's id; a post's `likes` list holds at most one
/// entry per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

impl HasId for Like {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.user
    }
}

/// A post, as persisted and as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID
    pub id: Uuid,
    /// Author's user id (reference, not embedded)
    pub user: Uuid,
    pub text: String,
    pub image: String,
    /// Author display name, snapshotted at creation
    pub name: String,
    /// Author avatar URL, snapshotted at creation
    pub avatar: String,
    /// Ordered like entries, most recent first
    pub likes: Vec<Like>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-post request
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CreatePostRequest {
    pub text: String,
    pub image: String,
}

/// Response carrying a single post
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: Post,
}

/// Response carrying the post listing
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Create-post response: confirmation message plus the stored post
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub msg: String,
    pub post: Post,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::idlist::{find_by_id, insert_front};

    #[test]
    fn test_like_is_keyed_by_user_id() {
        let user = Uuid::new_v4();
        let like = Like { user };
        assert_eq!(like.id(), &user);
    }

    #[test]
    fn test_like_wire_shape() {
        let user = Uuid::new_v4();
        let json = serde_json::to_value(Like { user }).unwrap();
        assert_eq!(json, serde_json::json!({ "user": user }));
    }

    #[test]
    fn test_second_like_by_same_user_is_detected() {
        let user = Uuid::new_v4();
        let mut likes: Vec<Like> = Vec::new();

        assert!(find_by_id(&likes, &user).is_none());
        insert_front(&mut likes, Like { user });

        // The handler rejects here instead of inserting again
        assert!(find_by_id(&likes, &user).is_some());
        assert_eq!(likes.len(), 1);
    }
}
