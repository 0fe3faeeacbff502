use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, serde_helpers::chrono_datetime_as_bson_datetime, Document};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    common::vote::VoteType,
    mongodb::{Coll, Id},
};

/// Core data of an anonymous community discussion post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPostCore {
    pub constituency: String,
    pub title: String,
    pub content: String,
    /// Random pseudonym, never linked to a real identity.
    pub author_id: String,
    pub upvotes: u64,
    pub downvotes: u64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Reserved for threaded replies; nothing writes to it yet.
    #[serde(default)]
    pub replies: Vec<Document>,
}

impl CommunityPostCore {
    /// A fresh post by a newly minted anonymous author, with no votes.
    pub fn new(constituency: String, title: String, content: String) -> Self {
        Self {
            constituency,
            title,
            content,
            author_id: anonymous_author_id(),
            upvotes: 0,
            downvotes: 0,
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }
}

/// A community post from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub post: CommunityPostCore,
}

impl CommunityPost {
    /// Assign a new unique ID to the given post data.
    pub fn new(post: CommunityPostCore) -> Self {
        Self { id: Id::new(), post }
    }

    /// Atomically add one vote of the given type to the post with the given ID.
    pub async fn vote(posts: &Coll<CommunityPost>, id: Id, vote: VoteType) -> Result<()> {
        let update = doc! {
            "$inc": { vote.counter_field(): 1 }
        };
        let result = posts.update_one(id.as_doc(), update, None).await?;
        if result.matched_count == 0 {
            return Err(Error::not_found(format!("Post with ID '{id}'")));
        }
        Ok(())
    }
}

impl Deref for CommunityPost {
    type Target = CommunityPostCore;

    fn deref(&self) -> &Self::Target {
        &self.post
    }
}

impl DerefMut for CommunityPost {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.post
    }
}

/// Generate an author pseudonym of the form `anon_` followed by 8 hex digits.
pub fn anonymous_author_id() -> String {
    format!("anon_{:08x}", rand::random::<u32>())
}
