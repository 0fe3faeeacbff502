use serde::{Deserialize, Serialize};

use crate::model::db::constituency::Constituency;

/// API-friendly representation of a constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstituencyDesc {
    pub constituency_id: String,
    pub name: String,
    pub district: String,
}

impl From<Constituency> for ConstituencyDesc {
    fn from(constituency: Constituency) -> Self {
        Self {
            constituency_id: constituency.code,
            name: constituency.name,
            district: constituency.district,
        }
    }
}
