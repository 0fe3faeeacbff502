use log::info;
use mongodb::{bson::doc, options::FindOptions};
use rocket::{serde::json::Json, Route};

use crate::error::{Error, Result};
use crate::model::{
    api::{
        community_post::{CommunityPostDesc, NewPostRequest, PostCreated, VoteRequest},
        message::Message,
    },
    common::vote::VoteType,
    db::community_post::{CommunityPost, CommunityPostCore},
    filter::equality_filter,
    mongodb::{Coll, Id},
    seed::find_or_seed,
};

pub fn routes() -> Vec<Route> {
    routes![community_posts, create_post, vote]
}

#[get("/api/community-posts?<constituency>")]
async fn community_posts(
    constituency: Option<&str>,
    posts: Coll<CommunityPost>,
) -> Result<Json<Vec<CommunityPostDesc>>> {
    let filter = equality_filter([("constituency", constituency)]);
    let newest_first = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();
    let found = find_or_seed(&posts, filter, newest_first).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[post("/api/community-posts", data = "<request>")]
async fn create_post(
    request: Json<NewPostRequest>,
    posts: Coll<CommunityPost>,
) -> Result<Json<PostCreated>> {
    let NewPostRequest {
        constituency,
        title,
        content,
    } = request.into_inner();
    let post = CommunityPost::new(CommunityPostCore::new(constituency, title, content));
    posts.insert_one(&post, None).await?;
    info!("Created post {} in {}", post.id, post.constituency);

    Ok(Json(PostCreated {
        message: "Post created successfully".to_string(),
        post_id: post.id.into(),
    }))
}

/// Vote on a post. The vote type may be given either as a query parameter
/// or in a JSON body; the query parameter takes precedence.
#[post("/api/community-posts/<post_id>/vote?<vote_type>", data = "<body>")]
async fn vote(
    post_id: &str,
    vote_type: Option<&str>,
    body: Option<Json<VoteRequest>>,
    posts: Coll<CommunityPost>,
) -> Result<Json<Message>> {
    let vote_type = match (vote_type, body) {
        (Some(vote_type), _) => vote_type.to_string(),
        (None, Some(body)) => body.into_inner().vote_type,
        (None, None) => return Err(Error::bad_request("Invalid vote type")),
    };
    let vote = vote_type.parse::<VoteType>()?;

    // An ID that can't be an ObjectId can't name a stored post.
    let id = post_id
        .parse::<Id>()
        .map_err(|_| Error::not_found(format!("Post with ID '{post_id}'")))?;
    CommunityPost::vote(&posts, id, vote).await?;

    Ok(Json(Message::new(format!("Post {vote}d successfully"))))
}
