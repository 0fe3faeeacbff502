use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::{
    api::id::ApiId,
    db::candidate::{Candidate, CandidateCore},
};

/// API-friendly representation of a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDesc {
    pub candidate_id: ApiId,
    #[serde(flatten)]
    pub candidate: CandidateCore,
}

impl From<Candidate> for CandidateDesc {
    fn from(candidate: Candidate) -> Self {
        Self {
            candidate_id: candidate.id.into(),
            candidate: candidate.candidate,
        }
    }
}

impl Deref for CandidateDesc {
    type Target = CandidateCore;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}
