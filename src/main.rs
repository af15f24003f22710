use fmro_backend::infrastructure::{AppConfig, AppContainer};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting fmro-backend on port {} with {} store",
        config.port,
        config.store.as_str()
    );

    let container = AppContainer::new(config)?;
    container.http_server().run().await
}
