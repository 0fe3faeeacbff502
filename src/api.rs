use rocket::Route;

use crate::cors;

mod community;
mod public;
mod search;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(public::routes());
    routes.extend(community::routes());
    routes.extend(search::routes());
    routes.extend(cors::routes());
    routes
}
