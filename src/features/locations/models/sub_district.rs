use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChildRecord, Record};
use crate::shared::search::LocalizedName;

/// Sub-district model representing Thai sub-districts (tambon)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubDistrict {
    pub id: i64,
    pub zip_code: i64,
    pub name_th: String,
    pub name_en: String,
    pub district_id: i64,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

impl Record for SubDistrict {
    fn id(&self) -> i64 {
        self.id
    }
}

impl ChildRecord for SubDistrict {
    fn parent_id(&self) -> i64 {
        self.district_id
    }
}

impl LocalizedName for SubDistrict {
    fn name_th(&self) -> &str {
        &self.name_th
    }

    fn name_en(&self) -> &str {
        &self.name_en
    }
}
