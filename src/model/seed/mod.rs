//! Sample data for every collection.
//!
//! Fixture documents carry deterministic IDs, so inserting a fixture set
//! that is already (partly) present only fills in what is missing: the
//! unique `_id` index rejects the duplicates. Concurrent seeding of the
//! same collection therefore can't produce duplicate documents.

use chrono::Utc;
use log::info;
use mongodb::{
    bson::Document,
    error::Error as DbError,
    options::{FindOptions, InsertManyOptions},
    Database,
};
use rocket::futures::TryStreamExt;
use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    db::{
        candidate::Candidate, community_post::CommunityPost, constituency::Constituency,
        fact_check::FactCheck, manifesto::ManifestoPromise,
    },
    mongodb::{is_only_duplicate_keys, Coll, MongoCollection},
};

mod constituencies;
mod fixtures;

pub use constituencies::constituencies;

/// A collection type with a fixed set of sample documents.
pub trait Fixture: MongoCollection + Serialize + Send + Sync + Sized {
    fn fixtures() -> Vec<Self>;
}

impl Fixture for Constituency {
    fn fixtures() -> Vec<Self> {
        constituencies()
    }
}

impl Fixture for Candidate {
    fn fixtures() -> Vec<Self> {
        fixtures::candidates()
    }
}

impl Fixture for ManifestoPromise {
    fn fixtures() -> Vec<Self> {
        fixtures::manifesto_promises()
    }
}

impl Fixture for FactCheck {
    fn fixtures() -> Vec<Self> {
        fixtures::fact_checks(Utc::now())
    }
}

impl Fixture for CommunityPost {
    fn fixtures() -> Vec<Self> {
        fixtures::community_posts(Utc::now())
    }
}

/// Insert every fixture of `T` that is not already present.
pub async fn insert_fixtures<T>(coll: &Coll<T>) -> Result<(), DbError>
where
    T: Fixture,
{
    let options = InsertManyOptions::builder().ordered(false).build();
    match coll.insert_many(T::fixtures(), options).await {
        Ok(_) => Ok(()),
        Err(e) if is_only_duplicate_keys(&e) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Seed the collection if it holds no documents at all.
/// Returns whether the fixtures were inserted.
pub async fn seed_if_empty<T>(coll: &Coll<T>) -> Result<bool, DbError>
where
    T: Fixture,
{
    if coll.count_documents(None, None).await? > 0 {
        return Ok(false);
    }
    info!("Seeding empty collection `{}`", T::NAME);
    insert_fixtures(coll).await?;
    Ok(true)
}

/// Seed every empty collection in the database.
pub async fn seed_all(db: &Database) -> Result<(), DbError> {
    seed_if_empty(&Coll::<Constituency>::from_db(db)).await?;
    seed_if_empty(&Coll::<Candidate>::from_db(db)).await?;
    seed_if_empty(&Coll::<ManifestoPromise>::from_db(db)).await?;
    seed_if_empty(&Coll::<FactCheck>::from_db(db)).await?;
    seed_if_empty(&Coll::<CommunityPost>::from_db(db)).await?;
    Ok(())
}

/// Read every document matching `filter`.
///
/// An unfiltered read that finds the collection empty seeds it and reads
/// again. Filtered reads never seed, however few documents they match.
pub async fn find_or_seed<T>(
    coll: &Coll<T>,
    filter: Document,
    options: impl Into<Option<FindOptions>>,
) -> Result<Vec<T>, DbError>
where
    T: Fixture + DeserializeOwned + Unpin + Send + Sync,
{
    let options = options.into();
    let unfiltered = filter.is_empty();
    let found = coll
        .find(filter.clone(), options.clone())
        .await?
        .try_collect::<Vec<_>>()
        .await?;
    if !found.is_empty() || !unfiltered {
        return Ok(found);
    }

    seed_if_empty(coll).await?;
    coll.find(filter, options)
        .await?
        .try_collect::<Vec<_>>()
        .await
}

#[cfg(test)]
mod tests {
    use mongodb::{bson::doc, Database};
    use rocket::{futures::future::join_all, tokio};

    use super::*;

    #[backend_test]
    async fn launch_seeds_every_collection(db: Database) {
        let count = |name: &'static str| {
            let db = db.clone();
            async move {
                db.collection::<Document>(name)
                    .count_documents(None, None)
                    .await
                    .unwrap()
            }
        };
        assert_eq!(count(Constituency::NAME).await, 234);
        assert_eq!(count(Candidate::NAME).await, 5);
        assert_eq!(count(ManifestoPromise::NAME).await, 5);
        assert_eq!(count(FactCheck::NAME).await, 3);
        assert_eq!(count(CommunityPost::NAME).await, 2);
    }

    #[backend_test]
    async fn reseeding_inserts_nothing(constituencies: Coll<Constituency>) {
        insert_fixtures(&constituencies).await.unwrap();
        insert_fixtures(&constituencies).await.unwrap();
        let count = constituencies.count_documents(None, None).await.unwrap();
        assert_eq!(count, 234);
    }

    #[backend_test]
    async fn partial_fixture_set_is_completed(candidates: Coll<Candidate>) {
        candidates
            .delete_many(doc! { "party": "AIADMK" }, None)
            .await
            .unwrap();
        assert_eq!(candidates.count_documents(None, None).await.unwrap(), 3);

        insert_fixtures(&candidates).await.unwrap();
        assert_eq!(candidates.count_documents(None, None).await.unwrap(), 5);
    }

    #[backend_test]
    async fn concurrent_seeding_does_not_duplicate(manifestos: Coll<ManifestoPromise>) {
        manifestos.drop(None).await.unwrap();

        let seeds = (0..8).map(|_| {
            let manifestos = manifestos.clone();
            tokio::spawn(async move { seed_if_empty(&manifestos).await })
        });
        let seeded = join_all(seeds)
            .await
            .into_iter()
            .map(|result| result.unwrap().unwrap())
            .filter(|seeded| *seeded)
            .count();

        assert!(seeded >= 1);
        assert_eq!(manifestos.count_documents(None, None).await.unwrap(), 5);
    }

    #[backend_test]
    async fn filtered_read_never_seeds(fact_checks: Coll<FactCheck>) {
        fact_checks.drop(None).await.unwrap();

        let found = find_or_seed(&fact_checks, doc! { "verdict": "False" }, None)
            .await
            .unwrap();
        assert!(found.is_empty());
        assert_eq!(fact_checks.count_documents(None, None).await.unwrap(), 0);

        let found = find_or_seed(&fact_checks, Document::new(), None)
            .await
            .unwrap();
        assert_eq!(found.len(), 3);
    }
}
