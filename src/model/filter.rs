use mongodb::bson::{doc, Bson, Document};

/// Build a filter matching every given field exactly.
///
/// Absent and empty values impose no condition, so an all-empty input yields
/// the match-everything filter `{}`.
pub fn equality_filter<'a, I>(fields: I) -> Document
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut filter = Document::new();
    for (field, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            filter.insert(field, value);
        }
    }
    filter
}

/// Build a filter matching documents where any of the given fields contains
/// `query` as a case-insensitive substring. The query is matched literally.
pub fn substring_search(fields: &[&str], query: &str) -> Document {
    let pattern = regex::escape(query);
    let alternatives = fields
        .iter()
        .map(|field| {
            let mut condition = Document::new();
            condition.insert(*field, doc! { "$regex": &pattern, "$options": "i" });
            Bson::Document(condition)
        })
        .collect::<Vec<_>>();
    doc! { "$or": alternatives }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_values_are_ignored() {
        let filter = equality_filter([("party", None), ("category", Some(""))]);
        assert!(filter.is_empty());
    }

    #[test]
    fn present_values_become_conditions() {
        let filter = equality_filter([("party", Some("DMK")), ("category", Some("Transport"))]);
        assert_eq!(filter, doc! { "party": "DMK", "category": "Transport" });
    }

    #[test]
    fn search_ors_across_fields() {
        let filter = substring_search(&["name", "party"], "dmk");
        assert_eq!(
            filter,
            doc! {
                "$or": [
                    { "name": { "$regex": "dmk", "$options": "i" } },
                    { "party": { "$regex": "dmk", "$options": "i" } },
                ]
            }
        );
    }

    #[test]
    fn search_escapes_regex_syntax() {
        let filter = substring_search(&["title"], "₹1000 (monthly)?");
        let pattern = filter.get_array("$or").unwrap()[0]
            .as_document()
            .unwrap()
            .get_document("title")
            .unwrap()
            .get_str("$regex")
            .unwrap()
            .to_string();
        assert_eq!(pattern, r"₹1000 \(monthly\)\?");
    }
}
