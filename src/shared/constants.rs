/// Default page number for paginated listings
pub const DEFAULT_PAGE: usize = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: usize = 100;

// =============================================================================
// DATA FILES
// =============================================================================

pub const GEOGRAPHIES_FILE: &str = "geographies.json";
pub const PROVINCES_FILE: &str = "provinces.json";
pub const DISTRICTS_FILE: &str = "districts.json";
pub const SUB_DISTRICTS_FILE: &str = "sub_districts.json";
