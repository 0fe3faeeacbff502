use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Core candidate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCore {
    pub name: String,
    pub party: String,
    /// Free-text constituency name; not checked against the constituency list.
    pub constituency: String,
    pub age: u32,
    pub education: String,
    pub criminal_cases: u32,
    /// Declared assets in rupees.
    pub assets: f64,
    /// Declared liabilities in rupees.
    pub liabilities: f64,
    #[serde(default)]
    pub incumbent: bool,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// A candidate from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub candidate: CandidateCore,
}

impl Deref for Candidate {
    type Target = CandidateCore;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}

impl DerefMut for Candidate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.candidate
    }
}
