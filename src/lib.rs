#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod model;

use config::{ConfigFairing, DatabaseFairing, SeedFairing};
use cors::CorsFairing;
use logging::LoggerFairing;

/// Assemble the server. The database connection is established when the
/// returned rocket is ignited.
pub fn build() -> Rocket<Build> {
    rocket::custom(config::figment())
        .attach(LoggerFairing)
        .attach(CorsFairing)
        .attach(ConfigFairing)
        .attach(DatabaseFairing)
        .attach(SeedFairing)
        .mount("/", api::routes())
}

/// Assemble the server around an existing database connection.
#[cfg(test)]
pub(crate) fn rocket_for_db(client: mongodb::Client, db_name: &str) -> Rocket<Build> {
    let db = client.database(db_name);
    rocket::custom(config::figment())
        .attach(CorsFairing)
        .attach(ConfigFairing)
        .attach(SeedFairing)
        .manage(client)
        .manage(db)
        .mount("/", api::routes())
}

/// Connect to the database server named in the test configuration.
#[cfg(test)]
pub(crate) async fn db_client() -> mongodb::Client {
    let config = config::figment()
        .extract::<config::DbConfig>()
        .expect("Invalid database config");
    mongodb::Client::with_uri_str(config.mongo_url())
        .await
        .expect("Could not connect to database")
}

/// A fresh database name for a single test.
#[cfg(test)]
pub(crate) fn database() -> String {
    let random: u32 = rand::random();
    format!("test{random}")
}
