pub mod candidate;
pub mod community_post;
pub mod constituency;
pub mod fact_check;
pub mod id;
pub mod manifesto;
pub mod message;
