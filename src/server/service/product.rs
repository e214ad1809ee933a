use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, Product},
    service::mail::MailService,
};

/// Subject of the notification sent when a requested product is missing.
pub const MISSING_PRODUCT_SUBJECT: &str = "Product Deleted";

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    mail_service: &'a dyn MailService,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, mail_service: &'a dyn MailService) -> Self {
        Self { db, mail_service }
    }

    /// Gets every product in storage order
    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a product by ID
    ///
    /// A miss is logged and reported through the mail service exactly once before
    /// `None` is returned.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = repo.find_by_id(id).await?;

        if product.is_none() {
            tracing::info!(product_id = id, "Product with id {} not found", id);
            self.mail_service.send(
                MISSING_PRODUCT_SUBJECT,
                &format!("Product with id {} was deleted", id),
            );
        }

        Ok(product)
    }

    /// Creates a product with its materials
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Inserts the given products only when the catalog is empty
    ///
    /// Returns the number of products inserted.
    pub async fn seed_if_empty(&self, products: Vec<CreateProductParams>) -> Result<usize, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for params in products {
            self.create(params).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}
