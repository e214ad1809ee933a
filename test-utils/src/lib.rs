//! Catalog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the product
//! catalog. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting products and materials.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_products() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_product_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let product = factory::create_product(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
