pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod outbox;
pub mod repository;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Settings;
pub use db::{create_pool, DbPool};
pub use repository::ProcurementRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::opportunities::create_opportunity,
        handlers::opportunities::get_opportunity,
        handlers::opportunities::list_opportunities,
        handlers::opportunities::close_opportunity,
        handlers::suppliers::register_supplier,
        handlers::suppliers::qualify_supplier,
        handlers::suppliers::list_suppliers,
        handlers::bids::submit_bid,
        handlers::bids::list_bids_by_opportunity,
    ),
    components(schemas(
        handlers::opportunities::CreateOpportunityRequest,
        handlers::opportunities::CreateOpportunityResponse,
        handlers::opportunities::OpportunityResponse,
        handlers::opportunities::ListOpportunitiesResponse,
        handlers::suppliers::RegisterSupplierRequest,
        handlers::suppliers::RegisterSupplierResponse,
        handlers::suppliers::SupplierResponse,
        handlers::suppliers::ListSuppliersResponse,
        handlers::bids::SubmitBidRequest,
        handlers::bids::SubmitBidResponse,
        handlers::bids::BidResponse,
        handlers::bids::ListBidsResponse,
    ))
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server. The outbox dispatcher runs separately; see
/// [`outbox::Dispatcher`].
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let repo = ProcurementRepository::new(pool);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .wrap(Logger::default())
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/opportunities")
                    .route("", web::post().to(handlers::opportunities::create_opportunity))
                    .route("", web::get().to(handlers::opportunities::list_opportunities))
                    .route("/{id}", web::get().to(handlers::opportunities::get_opportunity))
                    .route(
                        "/{id}/close",
                        web::post().to(handlers::opportunities::close_opportunity),
                    ),
            )
            .service(
                web::scope("/suppliers")
                    .route("", web::post().to(handlers::suppliers::register_supplier))
                    .route("", web::get().to(handlers::suppliers::list_suppliers))
                    .route(
                        "/{id}/qualify",
                        web::post().to(handlers::suppliers::qualify_supplier),
                    ),
            )
            .service(
                web::scope("/bids")
                    .route("", web::post().to(handlers::bids::submit_bid))
                    .route(
                        "/by-opportunity/{opportunity_id}",
                        web::get().to(handlers::bids::list_bids_by_opportunity),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
