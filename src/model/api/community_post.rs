use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::model::{api::id::ApiId, db::community_post::CommunityPost};

/// API-friendly representation of a community post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPostDesc {
    pub post_id: ApiId,
    pub constituency: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<Document>,
}

impl From<CommunityPost> for CommunityPostDesc {
    fn from(post: CommunityPost) -> Self {
        let core = post.post;
        Self {
            post_id: post.id.into(),
            constituency: core.constituency,
            title: core.title,
            content: core.content,
            author_id: core.author_id,
            upvotes: core.upvotes,
            downvotes: core.downvotes,
            created_at: core.created_at,
            replies: core.replies,
        }
    }
}

/// A request to publish a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPostRequest {
    pub constituency: String,
    pub title: String,
    pub content: String,
}

/// Confirmation of a newly published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreated {
    pub message: String,
    pub post_id: ApiId,
}

/// A vote submitted in the request body. The kind is validated by the
/// handler so that an unknown kind yields a descriptive error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub vote_type: String,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl NewPostRequest {
        pub fn example() -> Self {
            Self {
                constituency: "Chennai Central".to_string(),
                title: "T".to_string(),
                content: "C".to_string(),
            }
        }
    }
}
