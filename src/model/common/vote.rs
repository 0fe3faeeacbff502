use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The direction of a vote on a community post.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    /// The post field counting votes of this type.
    pub fn counter_field(&self) -> &'static str {
        match self {
            Self::Upvote => "upvotes",
            Self::Downvote => "downvotes",
        }
    }
}

impl Display for VoteType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upvote => f.write_str("upvote"),
            Self::Downvote => f.write_str("downvote"),
        }
    }
}

impl FromStr for VoteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            _ => Err(Error::bad_request("Invalid vote type")),
        }
    }
}
