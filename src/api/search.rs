use rocket::{futures::TryStreamExt, serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::{candidate::CandidateDesc, manifesto::ManifestoPromiseDesc},
    db::{candidate::Candidate, manifesto::ManifestoPromise},
    filter::substring_search,
    mongodb::Coll,
};

const CANDIDATE_SEARCH_FIELDS: [&str; 3] = ["name", "party", "constituency"];
const MANIFESTO_SEARCH_FIELDS: [&str; 3] = ["title", "description", "category"];

pub fn routes() -> Vec<Route> {
    routes![search_candidates, search_manifestos]
}

fn required_query(q: Option<&str>) -> Result<&str> {
    q.ok_or_else(|| Error::bad_request("Missing search query `q`"))
}

#[get("/api/search/candidates?<q>")]
async fn search_candidates(
    q: Option<&str>,
    candidates: Coll<Candidate>,
) -> Result<Json<Vec<CandidateDesc>>> {
    let filter = substring_search(&CANDIDATE_SEARCH_FIELDS, required_query(q)?);
    let found = candidates
        .find(filter, None)
        .await?
        .map_ok(CandidateDesc::from)
        .try_collect::<Vec<_>>()
        .await?;
    Ok(Json(found))
}

#[get("/api/search/manifestos?<q>")]
async fn search_manifestos(
    q: Option<&str>,
    manifestos: Coll<ManifestoPromise>,
) -> Result<Json<Vec<ManifestoPromiseDesc>>> {
    let filter = substring_search(&MANIFESTO_SEARCH_FIELDS, required_query(q)?);
    let found = manifestos
        .find(filter, None)
        .await?
        .map_ok(ManifestoPromiseDesc::from)
        .try_collect::<Vec<_>>()
        .await?;
    Ok(Json(found))
}

#[cfg(test)]
mod tests {
    use rocket::{http::Status, local::asynchronous::Client};

    use super::*;

    async fn candidates_matching(client: &Client, q: &str) -> Vec<CandidateDesc> {
        let response = client
            .get(uri!(search_candidates(Some(q))))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        response.into_json().await.unwrap()
    }

    #[backend_test]
    async fn candidate_search_is_case_insensitive_substring(client: Client) {
        let found = candidates_matching(&client, "DMK").await;
        // Both DMK and AIADMK candidates.
        assert_eq!(found.len(), 4);
        for candidate in &found {
            let haystack = [&candidate.name, &candidate.party, &candidate.constituency];
            assert!(haystack.iter().any(|s| s.to_lowercase().contains("dmk")));
        }

        assert_eq!(candidates_matching(&client, "dmk").await, found);
        assert_eq!(candidates_matching(&client, "coimbatore").await.len(), 2);
        assert_eq!(candidates_matching(&client, "natarajan").await.len(), 1);
    }

    #[backend_test]
    async fn empty_query_matches_every_candidate(client: Client) {
        assert_eq!(candidates_matching(&client, "").await.len(), 5);
    }

    #[backend_test]
    async fn regex_syntax_is_matched_literally(client: Client) {
        assert!(candidates_matching(&client, "(").await.is_empty());
        assert!(candidates_matching(&client, ".*").await.is_empty());
    }

    #[backend_test]
    async fn missing_query_is_a_bad_request(client: Client) {
        let response = client.get(uri!(search_candidates(_))).dispatch().await;
        assert_eq!(Status::BadRequest, response.status());
        let response = client.get(uri!(search_manifestos(_))).dispatch().await;
        assert_eq!(Status::BadRequest, response.status());
    }

    #[backend_test]
    async fn manifesto_search_covers_title_description_and_category(client: Client) {
        let search = |q: &'static str| {
            let client = &client;
            async move {
                client
                    .get(uri!(search_manifestos(Some(q))))
                    .dispatch()
                    .await
                    .into_json::<Vec<ManifestoPromiseDesc>>()
                    .await
                    .unwrap()
            }
        };

        // Title.
        assert_eq!(search("women").await.len(), 2);
        // Description only.
        assert_eq!(search("higher secondary").await.len(), 1);
        // Category.
        let education = search("EDUCATION").await;
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].title, "Free Laptop for Students");
        assert!(search("space programme").await.is_empty());
    }
}
