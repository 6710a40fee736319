use holonet::server::{
    config::Config, error::Error, model::app::AppState, router, seed::seed_database, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logging();

    let db = startup::connect_to_database(&config).await?;
    seed_database(&db).await?;

    let app = router::routes().with_state(AppState::from(db));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
