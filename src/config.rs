use log::{error, info};
use mongodb::{Client as MongoClient, Database};
use rocket::{
    fairing::{Fairing, Info, Kind},
    figment::{providers::Env, Figment},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{mongodb::ensure_indexes_exist, seed::seed_all};

/// The rocket figment (`Rocket.toml` and `ROCKET_*` environment variables),
/// with the raw `MONGO_URL` environment variable layered on top.
pub fn figment() -> Figment {
    rocket::Config::figment().merge(Env::raw().only(&["MONGO_URL"]))
}

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_seed_on_launch")]
    seed_on_launch: bool,
}

impl Config {
    /// Whether empty collections are filled with fixture data at launch.
    pub fn seed_on_launch(&self) -> bool {
        self.seed_on_launch
    }
}

fn default_seed_on_launch() -> bool {
    true
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// Configuration for the database.
#[derive(Debug, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_mongo_url")]
    mongo_url: String,
    #[serde(default = "default_db_name")]
    db_name: String,
}

impl DbConfig {
    /// Connection string of the MongoDB deployment.
    /// Configured via `MONGO_URL`.
    pub fn mongo_url(&self) -> &str {
        &self.mongo_url
    }

    /// Name of the database holding all collections.
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

fn default_mongo_url() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_db_name() -> String {
    "votewise_tn".to_string()
}

/// A fairing that loads the MongoDB config, connects to the database,
/// and places both a `Client` and a `Database` into managed state.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite | Kind::Shutdown,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded database config, connecting...");
        // Construct the connection.
        let client = match MongoClient::with_uri_str(config.mongo_url()).await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };
        let db = client.database(config.db_name());
        info!("...database connection online!");

        // Manage the state.
        rocket = rocket.manage(client).manage(db);
        Ok(rocket)
    }

    async fn on_shutdown(&self, rocket: &Rocket<rocket::Orbit>) {
        if let Some(client) = rocket.state::<MongoClient>() {
            info!("Closing database connection");
            client.clone().shutdown().await;
        }
    }
}

/// A fairing that prepares the managed `Database`: it ensures the required
/// indexes exist and, if configured, seeds every empty collection.
/// Must be attached after both [`ConfigFairing`] and the database is managed.
pub struct SeedFairing;

#[rocket::async_trait]
impl Fairing for SeedFairing {
    fn info(&self) -> Info {
        Info {
            name: "Seed",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let (db, seed) = match (rocket.state::<Database>(), rocket.state::<Config>()) {
            (Some(db), Some(config)) => (db.clone(), config.seed_on_launch()),
            _ => {
                error!("Database or config missing from managed state");
                return Err(rocket);
            }
        };

        if let Err(e) = ensure_indexes_exist(&db).await {
            error!("Failed to create indexes: {e}");
            return Err(rocket);
        }

        if seed {
            if let Err(e) = seed_all(&db).await {
                error!("Failed to seed database: {e}");
                return Err(rocket);
            }
        }

        Ok(rocket)
    }
}
