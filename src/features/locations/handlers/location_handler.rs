use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::core::error::{parse_optional_id, AppError, Result};
use crate::core::extractor::{path_id, AppQuery};
use crate::features::locations::dtos::{
    DistrictQuery, DistrictSubDistrictsQuery, DistrictWithProvince, ProvinceDistrictsQuery,
    ProvinceQuery, ProvinceWithGeography, SubDistrictQuery, SubDistrictWithDistrict,
};
use crate::features::locations::models::{District, Geography, Province, SubDistrict};
use crate::features::locations::services::{
    DistrictFilter, LocationService, ProvinceFilter, SubDistrictFilter,
};
use crate::shared::pagination::{paginate, PageRequest};
use crate::shared::types::{ApiResponse, PaginatedResponse};

/// Window a filtered list of borrowed records into an owned response
fn paginated<T: Clone>(
    items: &[&T],
    page: Option<&str>,
    limit: Option<&str>,
) -> Json<PaginatedResponse<T>> {
    let page = paginate(items, PageRequest::from_params(page, limit)).map(T::clone);
    Json(page.into())
}

// ==================== Geography Handlers ====================

/// List all geographies
#[utoipa::path(
    get,
    path = "/api/v1/geographies",
    responses(
        (status = 200, description = "List of geographies", body = ApiResponse<Vec<Geography>>)
    ),
    tag = "geographies"
)]
pub async fn list_geographies(
    State(service): State<Arc<LocationService>>,
) -> Json<ApiResponse<Vec<Geography>>> {
    Json(ApiResponse::success(service.list_geographies().to_vec()))
}

// ==================== Province Handlers ====================

/// List provinces, optionally filtered by geography and name
#[utoipa::path(
    get,
    path = "/api/v1/provinces",
    params(ProvinceQuery),
    responses(
        (status = 200, description = "Paginated provinces", body = PaginatedResponse<Province>),
        (status = 400, description = "Invalid geography_id parameter")
    ),
    tag = "provinces"
)]
pub async fn list_provinces(
    State(service): State<Arc<LocationService>>,
    AppQuery(query): AppQuery<ProvinceQuery>,
) -> Result<Json<PaginatedResponse<Province>>> {
    let geography_id = parse_optional_id(
        query.geography_id.as_deref(),
        "Invalid geography_id parameter",
    )?;

    let provinces = service.find_provinces(&ProvinceFilter {
        geography_id,
        search: query.search.as_deref(),
    });

    Ok(paginated(
        &provinces,
        query.page.as_deref(),
        query.limit.as_deref(),
    ))
}

/// Get a province with its geography
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{id}",
    params(
        ("id" = i64, Path, description = "Province ID")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceWithGeography>),
        (status = 400, description = "Invalid province ID"),
        (status = 404, description = "Province not found")
    ),
    tag = "provinces"
)]
pub async fn get_province(
    State(service): State<Arc<LocationService>>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<ProvinceWithGeography>>> {
    let id = path_id(path, "Invalid province ID")?;
    let province = service.get_province_with_geography(id)?;
    Ok(Json(ApiResponse::success(province)))
}

/// List districts in a province
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{id}/districts",
    params(
        ("id" = i64, Path, description = "Province ID"),
        ProvinceDistrictsQuery
    ),
    responses(
        (status = 200, description = "Paginated districts in the province", body = PaginatedResponse<District>),
        (status = 400, description = "Invalid province ID"),
        (status = 404, description = "Province not found")
    ),
    tag = "provinces"
)]
pub async fn list_districts_by_province(
    State(service): State<Arc<LocationService>>,
    path: std::result::Result<Path<String>, PathRejection>,
    AppQuery(query): AppQuery<ProvinceDistrictsQuery>,
) -> Result<Json<PaginatedResponse<District>>> {
    let province_id = path_id(path, "Invalid province ID")?;
    let districts = service.find_districts_of_province(province_id, query.search.as_deref())?;

    Ok(paginated(
        &districts,
        query.page.as_deref(),
        query.limit.as_deref(),
    ))
}

// ==================== District Handlers ====================

/// List districts, optionally filtered by province and name
#[utoipa::path(
    get,
    path = "/api/v1/districts",
    params(DistrictQuery),
    responses(
        (status = 200, description = "Paginated districts", body = PaginatedResponse<District>),
        (status = 400, description = "Invalid province_id parameter")
    ),
    tag = "districts"
)]
pub async fn list_districts(
    State(service): State<Arc<LocationService>>,
    AppQuery(query): AppQuery<DistrictQuery>,
) -> Result<Json<PaginatedResponse<District>>> {
    let province_id = parse_optional_id(
        query.province_id.as_deref(),
        "Invalid province_id parameter",
    )?;

    let districts = service.find_districts(&DistrictFilter {
        province_id,
        search: query.search.as_deref(),
    });

    Ok(paginated(
        &districts,
        query.page.as_deref(),
        query.limit.as_deref(),
    ))
}

/// Get a district with its province
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}",
    params(
        ("id" = i64, Path, description = "District ID")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictWithProvince>),
        (status = 400, description = "Invalid district ID"),
        (status = 404, description = "District not found")
    ),
    tag = "districts"
)]
pub async fn get_district(
    State(service): State<Arc<LocationService>>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<DistrictWithProvince>>> {
    let id = path_id(path, "Invalid district ID")?;
    let district = service.get_district_with_province(id)?;
    Ok(Json(ApiResponse::success(district)))
}

/// List sub-districts in a district
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}/subdistricts",
    params(
        ("id" = i64, Path, description = "District ID"),
        DistrictSubDistrictsQuery
    ),
    responses(
        (status = 200, description = "Paginated sub-districts in the district", body = PaginatedResponse<SubDistrict>),
        (status = 400, description = "Invalid district ID or zip_code parameter"),
        (status = 404, description = "District not found")
    ),
    tag = "districts"
)]
pub async fn list_sub_districts_by_district(
    State(service): State<Arc<LocationService>>,
    path: std::result::Result<Path<String>, PathRejection>,
    AppQuery(query): AppQuery<DistrictSubDistrictsQuery>,
) -> Result<Json<PaginatedResponse<SubDistrict>>> {
    let district_id = path_id(path, "Invalid district ID")?;
    // Unknown district wins over a malformed zip code
    if service.get_district(district_id).is_none() {
        return Err(AppError::NotFound("District not found".to_string()));
    }
    let zip_code = parse_optional_id(query.zip_code.as_deref(), "Invalid zip_code parameter")?;

    let sub_districts = service.find_sub_districts(&SubDistrictFilter {
        district_id: Some(district_id),
        zip_code,
        search: query.search.as_deref(),
    });

    Ok(paginated(
        &sub_districts,
        query.page.as_deref(),
        query.limit.as_deref(),
    ))
}

// ==================== Sub-district Handlers ====================

/// List sub-districts, optionally filtered by district, zip code and name
#[utoipa::path(
    get,
    path = "/api/v1/subdistricts",
    params(SubDistrictQuery),
    responses(
        (status = 200, description = "Paginated sub-districts", body = PaginatedResponse<SubDistrict>),
        (status = 400, description = "Invalid district_id or zip_code parameter")
    ),
    tag = "subdistricts"
)]
pub async fn list_sub_districts(
    State(service): State<Arc<LocationService>>,
    AppQuery(query): AppQuery<SubDistrictQuery>,
) -> Result<Json<PaginatedResponse<SubDistrict>>> {
    let district_id = parse_optional_id(
        query.district_id.as_deref(),
        "Invalid district_id parameter",
    )?;
    let zip_code = parse_optional_id(query.zip_code.as_deref(), "Invalid zip_code parameter")?;

    let sub_districts = service.find_sub_districts(&SubDistrictFilter {
        district_id,
        zip_code,
        search: query.search.as_deref(),
    });

    Ok(paginated(
        &sub_districts,
        query.page.as_deref(),
        query.limit.as_deref(),
    ))
}

/// Get a sub-district with its district and province
#[utoipa::path(
    get,
    path = "/api/v1/subdistricts/{id}",
    params(
        ("id" = i64, Path, description = "Sub-district ID")
    ),
    responses(
        (status = 200, description = "Sub-district details", body = ApiResponse<SubDistrictWithDistrict>),
        (status = 400, description = "Invalid sub-district ID"),
        (status = 404, description = "Sub-district not found")
    ),
    tag = "subdistricts"
)]
pub async fn get_sub_district(
    State(service): State<Arc<LocationService>>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<SubDistrictWithDistrict>>> {
    let id = path_id(path, "Invalid sub-district ID")?;
    let sub_district = service.get_sub_district_with_district(id)?;
    Ok(Json(ApiResponse::success(sub_district)))
}
