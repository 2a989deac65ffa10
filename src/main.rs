use dotenvy::dotenv;
use store_admin::{build_server, create_pool, run_migrations, Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let pool = create_pool(&settings.database_url, settings.pool_size)
        .map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    log::info!(
        "Starting admin server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(pool, &settings.host, settings.port)?.await
}
