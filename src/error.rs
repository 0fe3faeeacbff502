use log::{error, warn};
use mongodb::error::Error as DbError;
use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> Status {
        match self {
            Self::BadRequest(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Db(_) => Status::InternalServerError,
        }
    }
}

/// JSON body sent alongside an error status.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        let detail = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => {
                warn!("{status}: {msg}");
                msg
            }
            Self::Db(err) => {
                // Storage details stay in the log.
                error!("Database error: {err}");
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorDetail { detail })).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rocket::local::blocking::Client;

    use super::*;

    #[get("/db-error")]
    fn db_error() -> Result<()> {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
        Err(DbError::from(cause).into())
    }

    #[get("/missing")]
    fn missing() -> Result<()> {
        Err(Error::not_found("Post not found"))
    }

    fn client() -> Client {
        let rocket = rocket::build().mount("/", routes![db_error, missing]);
        Client::tracked(rocket).unwrap()
    }

    #[test]
    fn storage_errors_are_hidden_behind_a_500() {
        let client = client();
        let response = client.get("/db-error").dispatch();
        assert_eq!(Status::InternalServerError, response.status());
        let body = response.into_string().unwrap();
        assert!(!body.contains("connection reset"));
        assert_eq!(
            rocket::serde::json::from_str::<ErrorDetail>(&body).unwrap(),
            ErrorDetail {
                detail: "Internal server error".to_string()
            }
        );
    }

    #[test]
    fn client_errors_carry_their_message() {
        let client = client();
        let response = client.get("/missing").dispatch();
        assert_eq!(Status::NotFound, response.status());
        assert_eq!(
            response.into_json::<ErrorDetail>().unwrap(),
            ErrorDetail {
                detail: "Post not found".to_string()
            }
        );
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            Error::bad_request("Invalid vote type").status(),
            Status::BadRequest
        );
        assert_eq!(Error::not_found("Post").status(), Status::NotFound);
    }

    #[test]
    fn display_includes_message() {
        let err = Error::not_found("Post with ID 'abc'");
        assert_eq!(err.to_string(), "Not found: Post with ID 'abc'");
    }
}
