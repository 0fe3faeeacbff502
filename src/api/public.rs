use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
};
use rocket::{serde::json::Json, Route};

use crate::error::Result;
use crate::model::{
    api::{
        candidate::CandidateDesc, constituency::ConstituencyDesc, fact_check::FactCheckDesc,
        manifesto::ManifestoPromiseDesc, message::Message,
    },
    db::{
        candidate::Candidate, constituency::Constituency, fact_check::FactCheck,
        manifesto::ManifestoPromise,
    },
    filter::equality_filter,
    mongodb::Coll,
    seed::find_or_seed,
};

pub fn routes() -> Vec<Route> {
    routes![index, constituencies, candidates, manifestos, fact_checks]
}

#[get("/")]
fn index() -> Json<Message> {
    Json(Message::new("VoteWise TN API is running"))
}

#[get("/api/constituencies")]
async fn constituencies(
    constituencies: Coll<Constituency>,
) -> Result<Json<Vec<ConstituencyDesc>>> {
    let by_code = FindOptions::builder().sort(doc! { "_id": 1 }).build();
    let found = find_or_seed(&constituencies, Document::new(), by_code).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[get("/api/candidates?<constituency>")]
async fn candidates(
    constituency: Option<&str>,
    candidates: Coll<Candidate>,
) -> Result<Json<Vec<CandidateDesc>>> {
    let filter = equality_filter([("constituency", constituency)]);
    let found = find_or_seed(&candidates, filter, None).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[get("/api/manifestos?<party>&<category>")]
async fn manifestos(
    party: Option<&str>,
    category: Option<&str>,
    manifestos: Coll<ManifestoPromise>,
) -> Result<Json<Vec<ManifestoPromiseDesc>>> {
    let filter = equality_filter([("party", party), ("category", category)]);
    let found = find_or_seed(&manifestos, filter, None).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[get("/api/fact-checks?<verdict>&<constituency>")]
async fn fact_checks(
    verdict: Option<&str>,
    constituency: Option<&str>,
    fact_checks: Coll<FactCheck>,
) -> Result<Json<Vec<FactCheckDesc>>> {
    let filter = equality_filter([("verdict", verdict), ("constituency", constituency)]);
    let found = find_or_seed(&fact_checks, filter, None).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use mongodb::Database;
    use rocket::{http::Status, local::asynchronous::Client};

    use crate::model::common::verdict::Verdict;

    use super::*;

    #[backend_test]
    async fn index_reports_liveness(client: Client) {
        let response = client.get(uri!(index)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let message = response.into_json::<Message>().await.unwrap();
        assert_eq!(message, Message::new("VoteWise TN API is running"));
    }

    #[backend_test]
    async fn constituencies_are_stable_across_reads(client: Client, db: Database) {
        let first = client
            .get(uri!(constituencies))
            .dispatch()
            .await
            .into_json::<Vec<ConstituencyDesc>>()
            .await
            .unwrap();
        assert_eq!(first.len(), 234);
        assert_eq!(first[0].constituency_id, "001");
        assert_eq!(first[0].name, "Gummidipoondi");

        let second = client
            .get(uri!(constituencies))
            .dispatch()
            .await
            .into_json::<Vec<ConstituencyDesc>>()
            .await
            .unwrap();
        assert_eq!(first, second);

        let stored = Coll::<Constituency>::from_db(&db)
            .count_documents(None, None)
            .await
            .unwrap();
        assert_eq!(stored, 234);
    }

    #[backend_test]
    async fn empty_collection_is_reseeded_on_unfiltered_read(
        client: Client,
        constituencies: Coll<Constituency>,
    ) {
        constituencies.drop(None).await.unwrap();

        let response = client.get(uri!(constituencies)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let fetched = response.into_json::<Vec<ConstituencyDesc>>().await.unwrap();
        assert_eq!(fetched.len(), 234);
        assert_eq!(constituencies.count_documents(None, None).await.unwrap(), 234);
    }

    #[backend_test]
    async fn candidates_filtered_by_constituency(client: Client) {
        let all = client
            .get(uri!(candidates(_)))
            .dispatch()
            .await
            .into_json::<Vec<CandidateDesc>>()
            .await
            .unwrap();
        assert_eq!(all.len(), 5);

        let chennai = client
            .get(uri!(candidates(Some("Chennai Central"))))
            .dispatch()
            .await
            .into_json::<Vec<CandidateDesc>>()
            .await
            .unwrap();
        assert_eq!(chennai.len(), 3);
        assert!(chennai.iter().all(|c| c.constituency == "Chennai Central"));
    }

    #[backend_test]
    async fn unmatched_filter_returns_empty_without_seeding(
        client: Client,
        candidates: Coll<Candidate>,
    ) {
        candidates.drop(None).await.unwrap();

        let response = client
            .get(uri!(candidates(Some("Nowhere"))))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        let fetched = response.into_json::<Vec<CandidateDesc>>().await.unwrap();
        assert!(fetched.is_empty());
        assert_eq!(candidates.count_documents(None, None).await.unwrap(), 0);
    }

    #[backend_test]
    async fn manifestos_filtered_by_party_and_category(client: Client) {
        let dmk = client
            .get(uri!(manifestos(Some("DMK"), _)))
            .dispatch()
            .await
            .into_json::<Vec<ManifestoPromiseDesc>>()
            .await
            .unwrap();
        assert_eq!(dmk.len(), 3);
        assert!(dmk.iter().all(|p| p.party == "DMK"));

        let dmk_transport = client
            .get(uri!(manifestos(Some("DMK"), Some("Transport"))))
            .dispatch()
            .await
            .into_json::<Vec<ManifestoPromiseDesc>>()
            .await
            .unwrap();
        assert_eq!(dmk_transport.len(), 1);
        assert_eq!(dmk_transport[0].title, "Free Bus Travel for Women");
        assert_eq!(dmk_transport[0].fulfilled, Some(true));

        let bjp_transport = client
            .get(uri!(manifestos(Some("BJP"), Some("Transport"))))
            .dispatch()
            .await
            .into_json::<Vec<ManifestoPromiseDesc>>()
            .await
            .unwrap();
        assert!(bjp_transport.is_empty());
    }

    #[backend_test]
    async fn fact_checks_filtered_by_verdict(client: Client) {
        let all = client
            .get(uri!(fact_checks(_, _)))
            .dispatch()
            .await
            .into_json::<Vec<FactCheckDesc>>()
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let misleading = client
            .get(uri!(fact_checks(Some("Misleading"), _)))
            .dispatch()
            .await
            .into_json::<Vec<FactCheckDesc>>()
            .await
            .unwrap();
        assert_eq!(misleading.len(), 1);
        assert_eq!(misleading[0].verdict, Verdict::Misleading);
        assert!(misleading[0].tags.contains(&"MSP".to_string()));

        let unknown = client
            .get(uri!(fact_checks(Some("Bogus"), _)))
            .dispatch()
            .await
            .into_json::<Vec<FactCheckDesc>>()
            .await
            .unwrap();
        assert!(unknown.is_empty());

        let local = client
            .get(uri!(fact_checks(_, Some("Mylapore"))))
            .dispatch()
            .await
            .into_json::<Vec<FactCheckDesc>>()
            .await
            .unwrap();
        assert!(local.is_empty());
    }

    #[backend_test]
    async fn empty_filter_values_are_ignored(client: Client) {
        let response = client.get("/api/manifestos?party=&category=").dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let fetched = response
            .into_json::<Vec<ManifestoPromiseDesc>>()
            .await
            .unwrap();
        assert_eq!(fetched.len(), 5);
    }
}
