pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use actix_web::{error, middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::customer_service::CustomerService;
use application::order_service::OrderService;
use application::product_service::ProductService;
use errors::AppError;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::product_repo::DieselProductRepository;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type AppCustomerService = CustomerService<DieselCustomerRepository>;
pub type AppProductService = ProductService<DieselProductRepository>;
pub type AppOrderService =
    OrderService<DieselCustomerRepository, DieselProductRepository, DieselOrderRepository>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// Every repository and service is constructed here from the pool and handed
/// to the handlers as application data. The caller is responsible for
/// `.await`-ing (or `tokio::spawn`-ing) the returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let customer_repo = DieselCustomerRepository::new(pool.clone());
    let product_repo = DieselProductRepository::new(pool.clone());
    let order_repo = DieselOrderRepository::new(pool);

    let customers = web::Data::new(CustomerService::new(customer_repo.clone()));
    let products = web::Data::new(ProductService::new(product_repo.clone()));
    let orders = web::Data::new(OrderService::new(customer_repo, product_repo, order_repo));
    let openapi = openapi::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(customers.clone())
            .app_data(products.clone())
            .app_data(orders.clone())
            .app_data(web::JsonConfig::default().error_handler(|e, _| bad_request(e)))
            .app_data(web::PathConfig::default().error_handler(|e, _| bad_request(e)))
            .app_data(web::QueryConfig::default().error_handler(|e, _| bad_request(e)))
            .wrap(Logger::default())
            .service(
                web::scope("/v1/customers")
                    .route("", web::post().to(handlers::customers::create_customer))
                    .route("", web::get().to(handlers::customers::list_customers))
                    .route("/{id}", web::get().to(handlers::customers::get_customer))
                    .route("/{id}", web::put().to(handlers::customers::update_customer))
                    .route("/{id}", web::delete().to(handlers::customers::delete_customer)),
            )
            .service(
                web::scope("/v1/products")
                    .route("", web::post().to(handlers::products::create_product))
                    .route("", web::get().to(handlers::products::list_products))
                    .route("/{id}", web::get().to(handlers::products::get_product))
                    .route("/{id}", web::put().to(handlers::products::update_product))
                    .route("/{id}", web::delete().to(handlers::products::delete_product)),
            )
            .service(
                web::scope("/v1/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("/{id}", web::get().to(handlers::orders::get_order)),
            )
            // Unversioned alias kept for existing clients.
            .route("/orders/{id}", web::get().to(handlers::orders::get_order))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}

fn bad_request(e: impl std::fmt::Display) -> error::Error {
    AppError::BadRequest(e.to_string()).into()
}
