use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ChildRecord, Record};
use crate::shared::search::LocalizedName;

/// Province model representing Thai provinces (changwat)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Province {
    pub id: i64,
    pub name_th: String,
    pub name_en: String,
    pub geography_id: i64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub deleted_at: Option<DateTime<FixedOffset>>,
}

impl Record for Province {
    fn id(&self) -> i64 {
        self.id
    }
}

impl ChildRecord for Province {
    fn parent_id(&self) -> i64 {
        self.geography_id
    }
}

impl LocalizedName for Province {
    fn name_th(&self) -> &str {
        &self.name_th
    }

    fn name_en(&self) -> &str {
        &self.name_en
    }
}
