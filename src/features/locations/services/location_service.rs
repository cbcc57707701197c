use std::path::Path;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    DistrictWithProvince, ProvinceWithGeography, SubDistrictWithDistrict,
};
use crate::features::locations::index::{ChildIndex, Table};
use crate::features::locations::loader::{load_dataset, DataLoadError, Dataset};
use crate::features::locations::models::{District, Geography, Province, SubDistrict};
use crate::shared::search::filter_by_search;

/// Filters for the province listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvinceFilter<'a> {
    pub geography_id: Option<i64>,
    pub search: Option<&'a str>,
}

/// Filters for the district listing
#[derive(Debug, Clone, Copy, Default)]
pub struct DistrictFilter<'a> {
    pub province_id: Option<i64>,
    pub search: Option<&'a str>,
}

/// Filters for the sub-district listing
#[derive(Debug, Clone, Copy, Default)]
pub struct SubDistrictFilter<'a> {
    pub district_id: Option<i64>,
    pub zip_code: Option<i64>,
    pub search: Option<&'a str>,
}

/// Record counts and integrity figures computed once after indexing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub geographies: usize,
    pub provinces: usize,
    pub districts: usize,
    pub sub_districts: usize,
    pub duplicate_ids: usize,
    pub orphaned_provinces: usize,
    pub orphaned_districts: usize,
    pub orphaned_sub_districts: usize,
}

impl DatasetStats {
    pub fn orphans(&self) -> usize {
        self.orphaned_provinces + self.orphaned_districts + self.orphaned_sub_districts
    }
}

/// Read-only query engine over the Thai administrative hierarchy.
///
/// Built once at startup and shared as `Arc<LocationService>`. Nothing is ever
/// mutated after construction, so concurrent handlers read it without locking.
pub struct LocationService {
    geographies: Table<Geography>,
    provinces: Table<Province>,
    districts: Table<District>,
    sub_districts: Table<SubDistrict>,

    provinces_by_geography: ChildIndex,
    districts_by_province: ChildIndex,
    sub_districts_by_district: ChildIndex,
}

impl LocationService {
    pub fn new(dataset: Dataset) -> Self {
        let geographies = Table::new(dataset.geographies);
        let provinces = Table::new(dataset.provinces);
        let districts = Table::new(dataset.districts);
        let sub_districts = Table::new(dataset.sub_districts);

        let provinces_by_geography = ChildIndex::build(&provinces);
        let districts_by_province = ChildIndex::build(&districts);
        let sub_districts_by_district = ChildIndex::build(&sub_districts);

        let service = Self {
            geographies,
            provinces,
            districts,
            sub_districts,
            provinces_by_geography,
            districts_by_province,
            sub_districts_by_district,
        };
        service.log_stats();
        service
    }

    /// Load the data directory and build every index
    pub fn load(data_dir: &Path) -> std::result::Result<Self, DataLoadError> {
        Ok(Self::new(load_dataset(data_dir)?))
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            geographies: self.geographies.len(),
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            sub_districts: self.sub_districts.len(),
            duplicate_ids: self.geographies.duplicate_ids()
                + self.provinces.duplicate_ids()
                + self.districts.duplicate_ids()
                + self.sub_districts.duplicate_ids(),
            orphaned_provinces: self.provinces_by_geography.orphans(&self.geographies),
            orphaned_districts: self.districts_by_province.orphans(&self.provinces),
            orphaned_sub_districts: self.sub_districts_by_district.orphans(&self.districts),
        }
    }

    fn log_stats(&self) {
        let stats = self.stats();
        tracing::info!(
            "Location indexes built: geographies={}, provinces={} ({} parents), districts={} ({} parents), sub_districts={} ({} parents)",
            stats.geographies,
            stats.provinces,
            self.provinces_by_geography.parent_count(),
            stats.districts,
            self.districts_by_province.parent_count(),
            stats.sub_districts,
            self.sub_districts_by_district.parent_count()
        );

        if stats.duplicate_ids > 0 {
            tracing::warn!(
                "Dataset contains {} duplicate ids; the last record wins for lookups",
                stats.duplicate_ids
            );
        }
        if stats.orphans() > 0 {
            tracing::warn!(
                "Dataset contains orphaned references: provinces={}, districts={}, sub_districts={}",
                stats.orphaned_provinces,
                stats.orphaned_districts,
                stats.orphaned_sub_districts
            );
        }
    }

    // ==================== Geography Methods ====================

    pub fn list_geographies(&self) -> &[Geography] {
        self.geographies.all()
    }

    pub fn get_geography(&self, id: i64) -> Option<&Geography> {
        self.geographies.get(id)
    }

    // ==================== Province Methods ====================

    pub fn list_provinces(&self) -> &[Province] {
        self.provinces.all()
    }

    pub fn get_province(&self, id: i64) -> Option<&Province> {
        self.provinces.get(id)
    }

    /// Provinces in a geography, in load order
    pub fn list_provinces_by_geography(&self, geography_id: i64) -> Vec<&Province> {
        self.provinces_by_geography.children(geography_id, &self.provinces)
    }

    /// Apply the geography filter first, then the name search
    pub fn find_provinces(&self, filter: &ProvinceFilter<'_>) -> Vec<&Province> {
        let provinces = match filter.geography_id {
            Some(geography_id) => self.list_provinces_by_geography(geography_id),
            None => self.list_provinces().iter().collect(),
        };
        filter_by_search(provinces, filter.search)
    }

    /// Get a province with its geography embedded
    pub fn get_province_with_geography(&self, id: i64) -> Result<ProvinceWithGeography> {
        let province = self
            .get_province(id)
            .ok_or_else(|| AppError::NotFound("Province not found".to_string()))?;

        Ok(ProvinceWithGeography {
            province: province.clone(),
            geography: self.get_geography(province.geography_id).cloned(),
        })
    }

    // ==================== District Methods ====================

    pub fn list_districts(&self) -> &[District] {
        self.districts.all()
    }

    pub fn get_district(&self, id: i64) -> Option<&District> {
        self.districts.get(id)
    }

    /// Districts in a province, in load order
    pub fn list_districts_by_province(&self, province_id: i64) -> Vec<&District> {
        self.districts_by_province.children(province_id, &self.districts)
    }

    /// Apply the province filter first, then the name search
    pub fn find_districts(&self, filter: &DistrictFilter<'_>) -> Vec<&District> {
        let districts = match filter.province_id {
            Some(province_id) => self.list_districts_by_province(province_id),
            None => self.list_districts().iter().collect(),
        };
        filter_by_search(districts, filter.search)
    }

    /// Districts of a province that must exist
    pub fn find_districts_of_province(
        &self,
        province_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<&District>> {
        if !self.provinces.contains(province_id) {
            return Err(AppError::NotFound("Province not found".to_string()));
        }

        Ok(self.find_districts(&DistrictFilter {
            province_id: Some(province_id),
            search,
        }))
    }

    /// Get a district with its province embedded
    pub fn get_district_with_province(&self, id: i64) -> Result<DistrictWithProvince> {
        let district = self
            .get_district(id)
            .ok_or_else(|| AppError::NotFound("District not found".to_string()))?;

        Ok(DistrictWithProvince {
            district: district.clone(),
            province: self.get_province(district.province_id).cloned(),
        })
    }

    // ==================== Sub-district Methods ====================

    pub fn list_sub_districts(&self) -> &[SubDistrict] {
        self.sub_districts.all()
    }

    pub fn get_sub_district(&self, id: i64) -> Option<&SubDistrict> {
        self.sub_districts.get(id)
    }

    /// Sub-districts in a district, in load order
    pub fn list_sub_districts_by_district(&self, district_id: i64) -> Vec<&SubDistrict> {
        self.sub_districts_by_district.children(district_id, &self.sub_districts)
    }

    /// Apply the district filter, then the zip code, then the name search
    pub fn find_sub_districts(&self, filter: &SubDistrictFilter<'_>) -> Vec<&SubDistrict> {
        let mut sub_districts = match filter.district_id {
            Some(district_id) => self.list_sub_districts_by_district(district_id),
            None => self.list_sub_districts().iter().collect(),
        };

        if let Some(zip_code) = filter.zip_code {
            sub_districts.retain(|s| s.zip_code == zip_code);
        }

        filter_by_search(sub_districts, filter.search)
    }

    /// Get a sub-district with its district and province embedded.
    ///
    /// A missing district also leaves the province out, since the province is
    /// only reachable through it.
    pub fn get_sub_district_with_district(&self, id: i64) -> Result<SubDistrictWithDistrict> {
        let sub_district = self
            .get_sub_district(id)
            .ok_or_else(|| AppError::NotFound("Sub-district not found".to_string()))?;

        let district = self.get_district(sub_district.district_id);
        let province = district.and_then(|d| self.get_province(d.province_id));

        Ok(SubDistrictWithDistrict {
            sub_district: sub_district.clone(),
            district: district.cloned(),
            province: province.cloned(),
        })
    }
}
