use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde::Serialize;

use crate::{
    model::{api::ErrorDto, product::ProductDto},
    server::{
        error::AppError, service::product::ProductService, state::AppState,
        util::content::ContentFormat,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// XML envelope for the product list, one `<Product>` element per entry.
#[derive(Serialize)]
struct ProductListXml<'a> {
    #[serde(rename = "Product")]
    products: &'a [ProductDto],
}

/// List every product in the catalog.
///
/// Returns all stored products with their materials, ordered by ID. The list is
/// empty when the catalog has no products. Responds with XML when the `Accept`
/// header asks for it, JSON otherwise.
///
/// # Arguments
/// - `state` - Application state containing the database connection and mail service
/// - `headers` - Request headers used to select the response format
///
/// # Returns
/// - `200 OK` - Products as a JSON array or a `<Products>` XML document
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/product",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products in the catalog", content(
            (Vec<ProductDto> = "application/json"),
            (Vec<ProductDto> = "application/xml")
        )),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let service = ProductService::new(&state.db, state.mail_service.as_ref());

    let products: Vec<ProductDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    let format = ContentFormat::from_headers(&headers);
    match format {
        ContentFormat::Json => format.respond(StatusCode::OK, "Products", &products),
        ContentFormat::Xml => format.respond(
            StatusCode::OK,
            "Products",
            &ProductListXml {
                products: &products,
            },
        ),
    }
}

/// Get a single product by ID.
///
/// When no product has the requested ID, the miss is logged and a "Product Deleted"
/// notification is sent through the configured mail service before responding.
/// The product is returned as XML when the `Accept` header asks for it; error
/// bodies are always JSON.
///
/// # Arguments
/// - `state` - Application state containing the database connection and mail service
/// - `headers` - Request headers used to select the response format
/// - `id` - Product ID, must be positive
///
/// # Returns
/// - `200 OK` - The product as JSON or a `<Product>` XML document
/// - `400 Bad Request` - ID is zero or negative
/// - `404 Not Found` - No product with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The requested product", content(
            (ProductDto = "application/json"),
            (ProductDto = "application/xml")
        )),
        (status = 400, description = "Invalid product ID", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!(
            "Product id must be a positive integer, got {}",
            id
        )));
    }

    let service = ProductService::new(&state.db, state.mail_service.as_ref());

    let product = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    ContentFormat::from_headers(&headers).respond(StatusCode::OK, "Product", &product.into_dto())
}
