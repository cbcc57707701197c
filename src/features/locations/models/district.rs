use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChildRecord, Record};
use crate::shared::search::LocalizedName;

/// District model representing Thai districts (amphoe)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct District {
    pub id: i64,
    pub name_th: String,
    pub name_en: String,
    pub province_id: i64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

impl Record for District {
    fn id(&self) -> i64 {
        self.id
    }
}

impl ChildRecord for District {
    fn parent_id(&self) -> i64 {
        self.province_id
    }
}

impl LocalizedName for District {
    fn name_th(&self) -> &str {
        &self.name_th
    }

    fn name_en(&self) -> &str {
        &self.name_en
    }
}
