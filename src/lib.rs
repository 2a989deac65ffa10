pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::admin_service::AdminService;
use domain::admin::AdminSite;
use handlers::admin::StoreAdmin;
use infrastructure::admin_repo::DieselAdminRepository;

pub use config::Settings;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), BoxError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The admin registry is built once here and shared by every worker. The
/// caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let admin: web::Data<StoreAdmin> = web::Data::new(AdminService::new(
        AdminSite::store(),
        DieselAdminRepository::new(pool),
    ));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(admin.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/admin")
                    .route("", web::get().to(handlers::admin::index))
                    .route("/{entity}", web::get().to(handlers::admin::change_list))
                    .route("/{entity}/{id}", web::patch().to(handlers::admin::inline_edit)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", handlers::ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
