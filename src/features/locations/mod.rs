//! Thai administrative locations feature.
//!
//! Serves a fixed four-level hierarchy loaded from JSON files at startup and
//! indexed in memory. Every endpoint is a read against the same immutable
//! [`LocationService`].
//!
//! ## Data Hierarchy
//!
//! - Level 1: Geographies (ภาค) - 6 geographies
//! - Level 2: Provinces (จังหวัด) - 77 provinces
//! - Level 3: Districts (อำเภอ/เขต) - 928 districts
//! - Level 4: Sub-districts (ตำบล/แขวง) - 7,436 sub-districts
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/geographies` | List all geographies |
//! | GET | `/api/v1/provinces` | List provinces (`geography_id`, `search`, `page`, `limit`) |
//! | GET | `/api/v1/provinces/{id}` | Get province with its geography |
//! | GET | `/api/v1/provinces/{id}/districts` | List districts in a province |
//! | GET | `/api/v1/districts` | List districts (`province_id`, `search`, `page`, `limit`) |
//! | GET | `/api/v1/districts/{id}` | Get district with its province |
//! | GET | `/api/v1/districts/{id}/subdistricts` | List sub-districts in a district |
//! | GET | `/api/v1/subdistricts` | List sub-districts (`district_id`, `zip_code`, `search`, `page`, `limit`) |
//! | GET | `/api/v1/subdistricts/{id}` | Get sub-district with its district and province |

pub mod dtos;
pub mod handlers;
pub mod index;
pub mod loader;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationService;
