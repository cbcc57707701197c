use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/v1/geographies", get(handlers::list_geographies))
        // Province routes
        .route("/api/v1/provinces", get(handlers::list_provinces))
        .route("/api/v1/provinces/{id}", get(handlers::get_province))
        .route(
            "/api/v1/provinces/{id}/districts",
            get(handlers::list_districts_by_province),
        )
        // District routes
        .route("/api/v1/districts", get(handlers::list_districts))
        .route("/api/v1/districts/{id}", get(handlers::get_district))
        .route(
            "/api/v1/districts/{id}/subdistricts",
            get(handlers::list_sub_districts_by_district),
        )
        // Sub-district routes
        .route("/api/v1/subdistricts", get(handlers::list_sub_districts))
        .route("/api/v1/subdistricts/{id}", get(handlers::get_sub_district))
        .with_state(service)
}
