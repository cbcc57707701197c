use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Record;

/// Geography model representing one of Thailand's geographic regions (root of the hierarchy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Geography {
    pub id: i64,
    pub name: String,
}

impl Record for Geography {
    fn id(&self) -> i64 {
        self.id
    }
}
