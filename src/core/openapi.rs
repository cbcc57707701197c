use utoipa::{Modify, OpenApi};

use crate::features::health;
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers, models};
use crate::shared::pagination::Pagination;
use crate::shared::types::{ApiResponse, PaginatedResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Geographies
        locations_handlers::list_geographies,
        // Provinces
        locations_handlers::list_provinces,
        locations_handlers::get_province,
        locations_handlers::list_districts_by_province,
        // Districts
        locations_handlers::list_districts,
        locations_handlers::get_district,
        locations_handlers::list_sub_districts_by_district,
        // Sub-districts
        locations_handlers::list_sub_districts,
        locations_handlers::get_sub_district,
    ),
    components(
        schemas(
            // Shared
            Pagination,
            health::HealthResponse,
            // Locations
            models::Geography,
            models::Province,
            models::District,
            models::SubDistrict,
            locations_dtos::ProvinceWithGeography,
            locations_dtos::DistrictWithProvince,
            locations_dtos::SubDistrictWithDistrict,
            ApiResponse<Vec<models::Geography>>,
            ApiResponse<locations_dtos::ProvinceWithGeography>,
            ApiResponse<locations_dtos::DistrictWithProvince>,
            ApiResponse<locations_dtos::SubDistrictWithDistrict>,
            PaginatedResponse<models::Province>,
            PaginatedResponse<models::District>,
            PaginatedResponse<models::SubDistrict>,
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "geographies", description = "Geographic regions of Thailand (ภาค)"),
        (name = "provinces", description = "Provinces (จังหวัด)"),
        (name = "districts", description = "Districts (อำเภอ/เขต)"),
        (name = "subdistricts", description = "Sub-districts (ตำบล/แขวง) with zip codes"),
    ),
    info(
        title = "Thai Location API",
        version = "1.0.0",
        description = "Thai geographies, provinces, districts and sub-districts",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_location_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/api/v1/geographies",
            "/api/v1/provinces",
            "/api/v1/provinces/{id}",
            "/api/v1/provinces/{id}/districts",
            "/api/v1/districts",
            "/api/v1/districts/{id}",
            "/api/v1/districts/{id}/subdistricts",
            "/api/v1/subdistricts",
            "/api/v1/subdistricts/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}
