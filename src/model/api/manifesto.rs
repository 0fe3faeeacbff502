use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::model::{
    api::id::ApiId,
    db::manifesto::{ManifestoPromise, ManifestoPromiseCore},
};

/// API-friendly representation of a manifesto promise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestoPromiseDesc {
    pub promise_id: ApiId,
    #[serde(flatten)]
    pub promise: ManifestoPromiseCore,
}

impl From<ManifestoPromise> for ManifestoPromiseDesc {
    fn from(promise: ManifestoPromise) -> Self {
        Self {
            promise_id: promise.id.into(),
            promise: promise.promise,
        }
    }
}

impl Deref for ManifestoPromiseDesc {
    type Target = ManifestoPromiseCore;

    fn deref(&self) -> &Self::Target {
        &self.promise
    }
}
