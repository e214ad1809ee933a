//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let product = factory::create_product(&db).await?;
//!
//! // Customize with the builder
//! let bolt = factory::product::ProductFactory::new(&db)
//!     .id(1)
//!     .name("Bolt")
//!     .price(Decimal::new(50, 2))
//!     .build()
//!     .await?;
//!
//! // Create a product together with its materials
//! let (product, materials) =
//!     factory::helpers::create_product_with_materials(&db, &["Steel", "Zinc"]).await?;
//! ```
//!
//! # Available Factories
//!
//! - `product` - Create product entities
//! - `material` - Create material entities belonging to a product
//! - `helpers` - ID generation and multi-entity convenience methods

pub mod helpers;
pub mod material;
pub mod product;

pub use material::create_material;
pub use product::create_product;
