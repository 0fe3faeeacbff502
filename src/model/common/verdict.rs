use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The outcome of a fact-check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    /// Partly accurate but framed to mislead.
    Misleading,
    /// Not enough evidence either way.
    Unverified,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::True => "True",
            Self::False => "False",
            Self::Misleading => "Misleading",
            Self::Unverified => "Unverified",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{to_bson, Bson};

    use super::*;

    #[test]
    fn stored_as_capitalised_name() {
        assert_eq!(
            to_bson(&Verdict::Misleading).unwrap(),
            Bson::String("Misleading".into())
        );
        assert_eq!(Verdict::True.to_string(), "True");
    }
}
