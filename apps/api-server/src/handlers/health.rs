//! Liveness endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

fn liveness() -> Liveness {
    Liveness {
        service: "bulletin-api",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    }
}

/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(liveness())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liveness_payload_names_this_service() {
        let body = serde_json::to_value(liveness()).unwrap();
        assert_eq!(body["service"], "bulletin-api");
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
