use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A MongoDB object ID.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(ObjectId);

impl Id {
    /// Generate a fresh, globally unique ID.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// A deterministic ID for the `index`th fixture of a collection, tagged so
    /// that different collections never share an ID.
    pub fn fixture(tag: [u8; 4], index: u64) -> Self {
        let mut bytes = [0; 12];
        bytes[..4].copy_from_slice(&tag);
        bytes[4..].copy_from_slice(&index.to_be_bytes());
        Self(ObjectId::from_bytes(bytes))
    }

    /// A filter document selecting exactly this ID.
    pub fn as_doc(&self) -> Document {
        doc! { "_id": self.0 }
    }
}

impl Deref for Id {
    type Target = ObjectId;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for Id {
    type Err = mongodb::bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<ObjectId>()?))
    }
}
