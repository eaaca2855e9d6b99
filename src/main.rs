use token_counter::infrastructure::config::ServiceConfig;
use token_counter::infrastructure::logging::logger;

fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;

    if let Err(error) = logger::init_logger(&config.log_dir) {
        eprintln!("Failed to initialize logger: {}", error);
    }

    tracing::info!("Starting token counter");
    token_counter::run(config)
}
