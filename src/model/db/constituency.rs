use serde::{Deserialize, Serialize};

/// An assembly constituency. Its electoral code doubles as the document ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituency {
    /// Three-digit code, e.g. `"024"`.
    #[serde(rename = "_id")]
    pub code: String,
    pub name: String,
    pub district: String,
}

impl Constituency {
    pub fn new(number: u32, name: &str, district: &str) -> Self {
        Self {
            code: format!("{number:03}"),
            name: name.to_string(),
            district: district.to_string(),
        }
    }
}
