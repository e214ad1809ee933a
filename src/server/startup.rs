use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    model::product::CreateProductParams,
    service::{mail::MailService, product::ProductService},
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Filter directives are read from `RUST_LOG`, falling back to `info` for the
/// application and `warn` for sqlx. Calling this more than once is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Seeds the demo catalog when enabled and the product table is empty.
///
/// # Arguments
/// - `db` - Connected database with migrations applied
/// - `config` - Application configuration, `seed_demo_data` gates seeding
/// - `mail_service` - Mail service handed to the product service
pub async fn seed_products(
    db: &DatabaseConnection,
    config: &Config,
    mail_service: &dyn MailService,
) -> Result<(), AppError> {
    if !config.seed_demo_data {
        return Ok(());
    }

    let service = ProductService::new(db, mail_service);
    let inserted = service.seed_if_empty(demo_products()).await?;

    if inserted > 0 {
        tracing::info!("Seeded {} demo products", inserted);
    } else {
        tracing::info!("Catalog already has products, skipping demo seed");
    }

    Ok(())
}

fn demo_products() -> Vec<CreateProductParams> {
    vec![
        CreateProductParams {
            name: "Bolt".to_string(),
            price: Decimal::new(50, 2),
            description: Some("M8 hex bolt, zinc plated".to_string()),
            materials: vec!["Steel".to_string(), "Zinc".to_string()],
        },
        CreateProductParams {
            name: "Nut".to_string(),
            price: Decimal::new(25, 2),
            description: Some("M8 hex nut".to_string()),
            materials: vec!["Steel".to_string()],
        },
        CreateProductParams {
            name: "Washer".to_string(),
            price: Decimal::new(10, 2),
            description: None,
            materials: vec!["Stainless steel".to_string()],
        },
    ]
}
