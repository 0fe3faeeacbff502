use chrono::{DateTime, Utc};

use crate::model::{
    common::verdict::Verdict,
    db::{
        candidate::{Candidate, CandidateCore},
        community_post::{anonymous_author_id, CommunityPost, CommunityPostCore},
        fact_check::{FactCheck, FactCheckCore},
        manifesto::{ManifestoPromise, ManifestoPromiseCore},
    },
    mongodb::Id,
};

#[allow(clippy::too_many_arguments)]
fn candidate(
    name: &str,
    party: &str,
    constituency: &str,
    age: u32,
    education: &str,
    criminal_cases: u32,
    assets: f64,
    liabilities: f64,
    incumbent: bool,
) -> CandidateCore {
    CandidateCore {
        name: name.to_string(),
        party: party.to_string(),
        constituency: constituency.to_string(),
        age,
        education: education.to_string(),
        criminal_cases,
        assets,
        liabilities,
        incumbent,
        photo_url: None,
    }
}

pub fn candidates() -> Vec<Candidate> {
    [
        candidate(
            "Arjun Kumar",
            "DMK",
            "Chennai Central",
            45,
            "M.A. Political Science",
            0,
            2_500_000.0,
            500_000.0,
            true,
        ),
        candidate(
            "Priya Sharma",
            "AIADMK",
            "Chennai Central",
            52,
            "B.A. Economics",
            1,
            1_800_000.0,
            300_000.0,
            false,
        ),
        candidate(
            "Rajesh Natarajan",
            "BJP",
            "Chennai Central",
            38,
            "MBA",
            0,
            3_200_000.0,
            800_000.0,
            false,
        ),
        candidate(
            "Meera Devi",
            "DMK",
            "Coimbatore North",
            41,
            "M.Sc. Agriculture",
            0,
            1_500_000.0,
            200_000.0,
            false,
        ),
        candidate(
            "Karthik Subramanian",
            "AIADMK",
            "Coimbatore North",
            49,
            "B.E. Civil Engineering",
            2,
            4_500_000.0,
            1_200_000.0,
            true,
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(|(candidate, i)| Candidate {
        id: Id::fixture(*b"cand", i),
        candidate,
    })
    .collect()
}

fn promise(
    party: &str,
    title: &str,
    description: &str,
    category: &str,
    fulfilled: Option<bool>,
    evidence_url: Option<&str>,
    one_minute_explanation: &str,
) -> ManifestoPromiseCore {
    ManifestoPromiseCore {
        party: party.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        fulfilled,
        evidence_url: evidence_url.map(str::to_string),
        one_minute_explanation: one_minute_explanation.to_string(),
    }
}

pub fn manifesto_promises() -> Vec<ManifestoPromise> {
    [
        promise(
            "DMK",
            "Free Bus Travel for Women",
            "Provide free bus travel for all women across Tamil Nadu in government buses",
            "Transport",
            Some(true),
            Some("https://example.com/evidence1"),
            "DMK promised free bus travel for women during elections and implemented it successfully in 2021. All women can now travel free in government buses across TN.",
        ),
        promise(
            "DMK",
            "₹1000 Monthly Allowance for Women",
            "Monthly financial assistance of ₹1000 for women heads of families",
            "Social Welfare",
            Some(true),
            Some("https://example.com/evidence2"),
            "Under 'Kalaignar Magalir Urimai Thogai' scheme, eligible women receive ₹1000 monthly. This was a key election promise that has been implemented.",
        ),
        promise(
            "AIADMK",
            "Free Laptop for Students",
            "Provide free laptops to all higher secondary students in government schools",
            "Education",
            Some(true),
            Some("https://example.com/evidence3"),
            "AIADMK's flagship scheme provided free laptops to students from 2011-2021. Millions of students benefited from this digital inclusion initiative.",
        ),
        promise(
            "BJP",
            "Double Farmers Income",
            "Double the income of farmers through improved MSP and agricultural reforms",
            "Agriculture",
            Some(false),
            Some("https://example.com/evidence4"),
            "BJP promised to double farmers income by 2022 at national level. However, studies show farmer incomes have not doubled in the promised timeframe.",
        ),
        promise(
            "DMK",
            "Unemployment Allowance",
            "Monthly allowance of ₹1500 for unemployed youth with degrees",
            "Employment",
            Some(false),
            None,
            "DMK promised unemployment allowance during elections but implementation is still pending. Youth are waiting for this scheme to be rolled out.",
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(|(promise, i)| ManifestoPromise {
        id: Id::fixture(*b"mani", i),
        promise,
    })
    .collect()
}

fn fact_check(
    title: &str,
    description: &str,
    verdict: Verdict,
    source_url: &str,
    tags: [&str; 3],
    date_added: DateTime<Utc>,
) -> FactCheckCore {
    FactCheckCore {
        title: title.to_string(),
        description: description.to_string(),
        verdict,
        source_url: Some(source_url.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        date_added,
        constituency: None,
    }
}

/// Sample fact-checks, dated `now`.
pub fn fact_checks(now: DateTime<Utc>) -> Vec<FactCheck> {
    [
        fact_check(
            "Did DMK provide 1 crore jobs in TN?",
            "Viral claim that DMK government provided 1 crore jobs in Tamil Nadu",
            Verdict::False,
            "https://example.com/factcheck1",
            ["employment", "DMK", "jobs"],
            now,
        ),
        fact_check(
            "Are Tamil Nadu farmers getting MSP for all crops?",
            "Claim that TN farmers are getting Minimum Support Price for all agricultural crops",
            Verdict::Misleading,
            "https://example.com/factcheck2",
            ["agriculture", "MSP", "farmers"],
            now,
        ),
        fact_check(
            "Is Tamil the official language in TN High Court?",
            "Recent claim about Tamil being made official language in Tamil Nadu High Court proceedings",
            Verdict::True,
            "https://example.com/factcheck3",
            ["language", "court", "Tamil"],
            now,
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(|(fact_check, i)| FactCheck {
        id: Id::fixture(*b"fact", i),
        fact_check,
    })
    .collect()
}

/// Sample community posts, created at `now`.
pub fn community_posts(now: DateTime<Utc>) -> Vec<CommunityPost> {
    [
        (
            "What do you think about the new bus route?",
            "The new MTC bus route connecting our area is really helpful. But frequency could be better during peak hours.",
            12,
            2,
        ),
        (
            "Road conditions in our area",
            "The roads near the market have been in poor condition for months. When will our MLA address this issue?",
            8,
            1,
        ),
    ]
    .into_iter()
    .zip(0..)
    .map(|((title, content, upvotes, downvotes), i)| CommunityPost {
        id: Id::fixture(*b"post", i),
        post: CommunityPostCore {
            constituency: "Chennai Central".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author_id: anonymous_author_id(),
            upvotes,
            downvotes,
            created_at: now,
            replies: Vec::new(),
        },
    })
    .collect()
}
