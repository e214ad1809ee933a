//! SeaORM entities for the product catalog.

pub mod prelude;

pub mod material;
pub mod product;
