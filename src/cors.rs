use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    Request, Response, Route,
};

/// Methods advertised to credentialed requests, which may not use `*`.
const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// A rocket fairing that permits cross-origin access from anywhere.
///
/// Browsers read `*` literally on credentialed requests, so when an
/// `Origin` is given the origin and the requested headers are echoed back
/// and the methods are listed explicitly.
#[derive(Debug, Copy, Clone)]
pub struct CorsFairing;

#[rocket::async_trait]
impl Fairing for CorsFairing {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let headers = req.headers();
        let requested_headers = headers.get_one("Access-Control-Request-Headers");

        match headers.get_one("Origin") {
            Some(origin) => {
                res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
                res.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
                res.adjoin_header(Header::new("Vary", "Origin"));
            }
            None => {
                res.set_header(Header::new("Access-Control-Allow-Origin", "*"));
                res.set_header(Header::new("Access-Control-Allow-Methods", "*"));
            }
        }

        match requested_headers {
            Some(requested) => {
                res.set_header(Header::new("Access-Control-Allow-Headers", requested.to_string()));
                res.adjoin_header(Header::new("Vary", "Access-Control-Request-Headers"));
            }
            None => {
                res.set_header(Header::new("Access-Control-Allow-Headers", "*"));
            }
        }
        res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

pub fn routes() -> Vec<Route> {
    routes![preflight]
}

/// Answer any CORS preflight request; the fairing supplies the headers.
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}

#[cfg(test)]
mod tests {
    use rocket::{http::Header, local::blocking::Client};

    use super::*;

    fn client() -> Client {
        let rocket = rocket::build()
            .attach(CorsFairing)
            .mount("/", routes());
        Client::tracked(rocket).unwrap()
    }

    #[test]
    fn credentialed_preflight_gets_explicit_methods_and_headers() {
        let client = client();
        let response = client
            .options("/api/community-posts")
            .header(Header::new("Origin", "http://localhost:3000"))
            .header(Header::new("Access-Control-Request-Method", "POST"))
            .header(Header::new(
                "Access-Control-Request-Headers",
                "content-type, authorization",
            ))
            .dispatch();

        assert_eq!(Status::NoContent, response.status());
        let headers = response.headers();
        assert_eq!(
            headers.get_one("Access-Control-Allow-Origin"),
            Some("http://localhost:3000")
        );
        assert_eq!(headers.get_one("Access-Control-Allow-Credentials"), Some("true"));
        let methods = headers.get_one("Access-Control-Allow-Methods").unwrap();
        assert_ne!(methods, "*");
        assert!(methods.split(", ").any(|m| m == "POST"));
        assert_eq!(
            headers.get_one("Access-Control-Allow-Headers"),
            Some("content-type, authorization")
        );
    }

    #[test]
    fn wildcard_origin_without_origin_header() {
        let client = client();
        let response = client.options("/").dispatch();
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );
    }
}
