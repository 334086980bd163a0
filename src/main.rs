use std::sync::Arc;

use dotenvy::dotenv;
use procurement_service::outbox::{Dispatcher, LogPublisher};
use procurement_service::{build_server, create_pool, run_migrations, Settings};
use tokio::sync::watch;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env();
    let pool = create_pool(&settings.database_url);
    run_migrations(&pool);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let dispatcher = Dispatcher::new(
        pool.clone(),
        Arc::new(LogPublisher),
        settings.dispatcher.clone(),
    );
    let dispatcher_handle = tokio::spawn(dispatcher.run(shutdown_rx));

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    let result = build_server(pool, &settings.host, settings.port)?.await;

    // Let an in-flight dispatch cycle finish before the process exits.
    let _ = shutdown_tx.send(true);
    let _ = dispatcher_handle.await;

    result
}
