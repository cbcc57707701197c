pub mod constants;
pub mod pagination;
pub mod search;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
