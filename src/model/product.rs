use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    /// Unit price with at most two fractional digits.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.5)]
    pub price: Decimal,
    pub description: Option<String>,
    pub materials: Vec<MaterialDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaterialDto {
    pub id: i32,
    pub name: String,
}
