pub mod api;
pub mod common;
pub mod db;
pub mod filter;
pub mod mongodb;
pub mod seed;
