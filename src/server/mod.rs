//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. It
//! follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and notification side effects
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, mail service)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util`) - Response content negotiation (JSON or XML)
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the path input and calls the service
//! 3. **Service** queries through the repository and notifies on a miss
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
