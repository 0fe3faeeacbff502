use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::model::mongodb::Id;

/// Core data of a party's manifesto promise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestoPromiseCore {
    pub party: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// `None` while the outcome is still undetermined.
    #[serde(default)]
    pub fulfilled: Option<bool>,
    #[serde(default)]
    pub evidence_url: Option<String>,
    pub one_minute_explanation: String,
}

/// A manifesto promise from the database, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestoPromise {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub promise: ManifestoPromiseCore,
}

impl Deref for ManifestoPromise {
    type Target = ManifestoPromiseCore;

    fn deref(&self) -> &Self::Target {
        &self.promise
    }
}

impl DerefMut for ManifestoPromise {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.promise
    }
}
