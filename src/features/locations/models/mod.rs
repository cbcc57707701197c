mod district;
mod geography;
mod province;
mod sub_district;

pub use district::District;
pub use geography::Geography;
pub use province::Province;
pub use sub_district::SubDistrict;

/// A record addressable by its integer id
pub trait Record {
    fn id(&self) -> i64;
}

/// A record that belongs to exactly one parent one level up
pub trait ChildRecord: Record {
    fn parent_id(&self) -> i64;
}
