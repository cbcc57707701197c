use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::features::locations::loader::Dataset;
use crate::features::locations::models::{District, Geography, Province, SubDistrict};
use crate::shared::constants::{
    DISTRICTS_FILE, GEOGRAPHIES_FILE, PROVINCES_FILE, SUB_DISTRICTS_FILE,
};

fn timestamp() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2019-08-09T03:33:09+07:00").unwrap()
}

pub fn geography(id: i64, name: &str) -> Geography {
    Geography {
        id,
        name: name.to_string(),
    }
}

pub fn province(id: i64, name_th: &str, name_en: &str, geography_id: i64) -> Province {
    Province {
        id,
        name_th: name_th.to_string(),
        name_en: name_en.to_string(),
        geography_id,
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: None,
    }
}

pub fn district(id: i64, name_th: &str, name_en: &str, province_id: i64) -> District {
    District {
        id,
        name_th: name_th.to_string(),
        name_en: name_en.to_string(),
        province_id,
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: None,
    }
}

pub fn sub_district(
    id: i64,
    zip_code: i64,
    name_th: &str,
    name_en: &str,
    district_id: i64,
) -> SubDistrict {
    SubDistrict {
        id,
        zip_code,
        name_th: name_th.to_string(),
        name_en: name_en.to_string(),
        district_id,
        lat: None,
        long: None,
        created_at: timestamp(),
        updated_at: timestamp(),
        deleted_at: None,
    }
}

/// A small but consistent slice of the real hierarchy
pub fn sample_dataset() -> Dataset {
    Dataset {
        geographies: vec![
            geography(1, "ภาคเหนือ"),
            geography(2, "ภาคกลาง"),
            geography(3, "ภาคตะวันออกเฉียงเหนือ"),
        ],
        provinces: vec![
            province(10, "กรุงเทพมหานคร", "Bangkok", 2),
            province(38, "เชียงใหม่", "Chiang Mai", 1),
            province(39, "เชียงราย", "Chiang Rai", 1),
            province(51, "ลำพูน", "Lamphun", 1),
        ],
        districts: vec![
            district(1001, "เขตพระนคร", "Khet Phra Nakhon", 10),
            district(1033, "เขตคลองเตย", "Khet Khlong Toei", 10),
            district(1039, "เขตวัฒนา", "Khet Watthana", 10),
            district(3801, "เมืองเชียงใหม่", "Mueang Chiang Mai", 38),
        ],
        sub_districts: vec![
            sub_district(100101, 10200, "พระบรมมหาราชวัง", "Phra Borom Maha Ratchawang", 1001),
            sub_district(100102, 10200, "วังบูรพาภิรมย์", "Wang Burapha Phirom", 1001),
            sub_district(103301, 10110, "คลองเตย", "Khlong Toei", 1033),
            sub_district(103302, 10110, "คลองตัน", "Khlong Tan", 1033),
            sub_district(103901, 10110, "คลองเตยเหนือ", "Khlong Toei Nuea", 1039),
            sub_district(380101, 50200, "ศรีภูมิ", "Si Phum", 3801),
        ],
    }
}

/// One record per level whose parent reference points nowhere
pub fn orphaned_dataset() -> Dataset {
    Dataset {
        geographies: vec![geography(1, "ภาคเหนือ")],
        provinces: vec![province(500, "ไม่มีภาค", "No Geography", 99)],
        districts: vec![district(5001, "ไม่มีจังหวัด", "No Province", 999)],
        sub_districts: vec![sub_district(500101, 99999, "ไม่มีอำเภอ", "No District", 9999)],
    }
}

/// Geography 1 holding `count` provinces named "Province N"
pub fn dataset_with_provinces(count: i64) -> Dataset {
    Dataset {
        geographies: vec![geography(1, "ภาคกลาง"), geography(2, "ภาคใต้")],
        provinces: (1..=count)
            .map(|id| province(id, &format!("จังหวัด {id}"), &format!("Province {id}"), 1))
            .collect(),
        districts: Vec::new(),
        sub_districts: Vec::new(),
    }
}

/// Write `dataset` as the four JSON files the loader expects
pub fn write_dataset(dir: &Path, dataset: &Dataset) {
    fs::write(
        dir.join(GEOGRAPHIES_FILE),
        serde_json::to_vec(&dataset.geographies).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(PROVINCES_FILE),
        serde_json::to_vec(&dataset.provinces).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(DISTRICTS_FILE),
        serde_json::to_vec(&dataset.districts).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(SUB_DISTRICTS_FILE),
        serde_json::to_vec(&dataset.sub_districts).unwrap(),
    )
    .unwrap();
}
