//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches entities directly. All catalog queries and inserts go
//! through these repositories.

pub mod product;

#[cfg(test)]
mod test;
