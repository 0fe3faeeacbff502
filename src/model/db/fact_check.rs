use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::{common::verdict::Verdict, mongodb::Id};

/// Core fact-check data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckCore {
    /// The claim being checked.
    pub title: String,
    pub description: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date_added: DateTime<Utc>,
    /// Set only for claims about a specific constituency.
    #[serde(default)]
    pub constituency: Option<String>,
}

/// A fact-check from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheck {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub fact_check: FactCheckCore,
}

impl Deref for FactCheck {
    type Target = FactCheckCore;

    fn deref(&self) -> &Self::Target {
        &self.fact_check
    }
}

impl DerefMut for FactCheck {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fact_check
    }
}
