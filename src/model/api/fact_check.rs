use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{api::id::ApiId, common::verdict::Verdict, db::fact_check::FactCheck};

/// API-friendly representation of a fact-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckDesc {
    pub fact_id: ApiId,
    pub title: String,
    pub description: String,
    pub verdict: Verdict,
    pub source_url: Option<String>,
    pub tags: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub constituency: Option<String>,
}

impl From<FactCheck> for FactCheckDesc {
    fn from(fact_check: FactCheck) -> Self {
        let core = fact_check.fact_check;
        Self {
            fact_id: fact_check.id.into(),
            title: core.title,
            description: core.description,
            verdict: core.verdict,
            source_url: core.source_url,
            tags: core.tags,
            date_added: core.date_added,
            constituency: core.constituency,
        }
    }
}
