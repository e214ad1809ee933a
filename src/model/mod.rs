//! Data transfer objects serialized on the HTTP boundary.

pub mod api;
pub mod product;
