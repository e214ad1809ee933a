use crate::server::{data::product::ProductRepository, model::product::CreateProductParams};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;

fn bolt_params() -> CreateProductParams {
    CreateProductParams {
        name: "Bolt".to_string(),
        price: Decimal::new(50, 2),
        description: Some("M8 hex bolt".to_string()),
        materials: vec!["Steel".to_string(), "Zinc".to_string()],
    }
}
