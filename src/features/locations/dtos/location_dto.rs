use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::locations::models::{District, Geography, Province, SubDistrict};

// ==================== Query Parameters ====================
//
// Every value arrives as a raw string. Numeric filters are parsed by the
// handler so a malformed value can be reported per parameter, while page and
// limit are parsed leniently by `PageRequest`.

/// Query parameters for `GET /api/v1/provinces`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProvinceQuery {
    /// Only provinces in this geography
    #[param(value_type = Option<i64>, example = 1)]
    pub geography_id: Option<String>,
    /// Case-insensitive partial match on `name_th` or `name_en`
    #[param(example = "chiang")]
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<usize>, minimum = 1)]
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100)
    #[param(value_type = Option<usize>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

/// Query parameters for `GET /api/v1/districts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DistrictQuery {
    /// Only districts in this province
    #[param(value_type = Option<i64>, example = 10)]
    pub province_id: Option<String>,
    /// Case-insensitive partial match on `name_th` or `name_en`
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<usize>, minimum = 1)]
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100)
    #[param(value_type = Option<usize>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

/// Query parameters for `GET /api/v1/subdistricts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct SubDistrictQuery {
    /// Only sub-districts in this district
    #[param(value_type = Option<i64>, example = 1001)]
    pub district_id: Option<String>,
    /// Exact postal code
    #[param(value_type = Option<i64>, example = 10110)]
    pub zip_code: Option<String>,
    /// Case-insensitive partial match on `name_th` or `name_en`
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<usize>, minimum = 1)]
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100)
    #[param(value_type = Option<usize>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

/// Query parameters for `GET /api/v1/provinces/{id}/districts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProvinceDistrictsQuery {
    /// Case-insensitive partial match on `name_th` or `name_en`
    pub search: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<usize>, minimum = 1)]
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100)
    #[param(value_type = Option<usize>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

/// Query parameters for `GET /api/v1/districts/{id}/subdistricts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DistrictSubDistrictsQuery {
    /// Case-insensitive partial match on `name_th` or `name_en`
    pub search: Option<String>,
    /// Exact postal code
    #[param(value_type = Option<i64>)]
    pub zip_code: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<usize>, minimum = 1)]
    pub page: Option<String>,
    /// Items per page (default: 20, max: 100)
    #[param(value_type = Option<usize>, minimum = 1, maximum = 100)]
    pub limit: Option<String>,
}

// ==================== Embedded Views ====================

/// A province together with the geography it belongs to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProvinceWithGeography {
    #[serde(flatten)]
    pub province: Province,
    /// Omitted when the referenced geography does not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geography: Option<Geography>,
}

/// A district together with its province
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DistrictWithProvince {
    #[serde(flatten)]
    pub district: District,
    /// Omitted when the referenced province does not exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<Province>,
}

/// A sub-district together with its district and that district's province
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubDistrictWithDistrict {
    #[serde(flatten)]
    pub sub_district: SubDistrict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<District>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<Province>,
}
